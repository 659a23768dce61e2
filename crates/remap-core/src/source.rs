//! Source normalization for the mapping engine
//!
//! A raw input value is normalized exactly once, when the engine is
//! constructed, into one of four canonical shapes. Downstream code never
//! sees the original structured-payload type again.
//!
//! Copyright (c) 2025 Remap Contributors
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// The canonical flat key→value intermediate representation.
///
/// Keys are unique and keep insertion order (`serde_json` is built with the
/// `preserve_order` feature).
pub type FlatMap = serde_json::Map<String, Value>;

/// Capability exposed by structured payloads (e.g. a web request wrapper):
/// export every field as a flat mapping.
///
/// Checked once, at engine construction. Any adaptable source type may
/// implement this instead of the engine special-casing concrete types.
pub trait ExportAll {
    fn export_all(&self) -> FlatMap;
}

/// A normalized source value.
///
/// JSON text is kept verbatim and parsed lazily, at the first terminal
/// operation that needs it; construction never fails and performs no
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A flat key→value mapping.
    Mapping(FlatMap),
    /// An ordered sequence of items; only meaningful in collection mode.
    Sequence(Vec<Value>),
    /// JSON text, parsed on first use.
    Text(String),
    /// Any other value (scalars, null).
    Opaque(Value),
}

impl Source {
    /// Normalize an opaque object through its `Serialize` impl.
    ///
    /// This is the explicit reflection step: the object's public fields
    /// become a flat mapping (or whatever value shape it serializes to).
    pub fn from_serialize<T: Serialize>(object: &T) -> Result<Self> {
        let value = serde_json::to_value(object)?;
        Ok(Source::from(value))
    }

    /// Normalize a structured payload via its export capability.
    pub fn from_payload(payload: &dyn ExportAll) -> Self {
        Source::Mapping(payload.export_all())
    }

    /// Resolve deferred JSON text into a concrete source shape.
    ///
    /// Non-text sources are returned as-is. Malformed text surfaces as a
    /// serialization error here, at the point of use.
    pub(crate) fn resolved(&self) -> Result<Cow<'_, Source>> {
        match self {
            Source::Text(raw) => {
                let parsed = match serde_json::from_str::<Value>(raw)? {
                    Value::Object(map) => Source::Mapping(map),
                    Value::Array(items) => Source::Sequence(items),
                    other => Source::Opaque(other),
                };
                Ok(Cow::Owned(parsed))
            }
            other => Ok(Cow::Borrowed(other)),
        }
    }

    /// View the whole source as a single item value.
    pub(crate) fn as_item(&self) -> Value {
        match self {
            Source::Mapping(map) => Value::Object(map.clone()),
            Source::Sequence(items) => Value::Array(items.clone()),
            Source::Text(raw) => Value::String(raw.clone()),
            Source::Opaque(value) => value.clone(),
        }
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Source::Mapping(map),
            Value::Array(items) => Source::Sequence(items),
            Value::String(text) => Source::Text(text),
            other => Source::Opaque(other),
        }
    }
}

impl From<FlatMap> for Source {
    fn from(map: FlatMap) -> Self {
        Source::Mapping(map)
    }
}

impl From<Vec<Value>> for Source {
    fn from(items: Vec<Value>) -> Self {
        Source::Sequence(items)
    }
}

impl From<Vec<FlatMap>> for Source {
    fn from(items: Vec<FlatMap>) -> Self {
        Source::Sequence(items.into_iter().map(Value::Object).collect())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}

/// Coerce a single item into the canonical flat mapping.
///
/// Only object-shaped values flatten; anything else is a hard error rather
/// than a lossy cast.
pub(crate) fn flatten(item: &Value) -> Result<FlatMap> {
    match item {
        Value::Object(map) => Ok(map.clone()),
        other => Err(Error::serialization(format!(
            "cannot represent {} as a flat mapping",
            value_kind(other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}
