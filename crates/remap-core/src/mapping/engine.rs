//! The mapping engine
//!
//! A `Mapper` is a short-lived, single-owner, configure-then-execute object:
//! it is built around one normalized source, optionally switched into
//! collection mode and given a custom mapper chain, then asked for exactly
//! one of three terminal results: filled targets (`to`), flat mappings
//! (`to_array`), or JSON text (`to_json`).
//!
//! Copyright (c) 2025 Remap Contributors
//! Licensed under the Apache-2.0 license

use crate::instantiate::{Instance, Instantiator, Registry};
use crate::source::{flatten, ExportAll, FlatMap, Source};
use crate::target::Target;
use crate::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::chain::MapperRef;
use super::collection::MappedCollection;

/// Result of the `to` terminal operation.
pub enum Mapped {
    /// Single-item mode: one filled target.
    One(Box<dyn Target>),
    /// Collection mode: an ordered container, one target per source item.
    Collection(MappedCollection),
}

impl Mapped {
    pub fn into_one(self) -> Option<Box<dyn Target>> {
        match self {
            Mapped::One(target) => Some(target),
            Mapped::Collection(_) => None,
        }
    }

    pub fn into_collection(self) -> Option<MappedCollection> {
        match self {
            Mapped::One(_) => None,
            Mapped::Collection(collection) => Some(collection),
        }
    }
}

impl fmt::Debug for Mapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapped::One(_) => f.write_str("Mapped::One"),
            Mapped::Collection(collection) => {
                write!(f, "Mapped::Collection(len: {})", collection.len())
            }
        }
    }
}

/// Result of the `to_array` terminal operation: the source projected into
/// plain flat-mapping form, no target types involved.
#[derive(Debug, Clone, PartialEq)]
pub enum Exported {
    Mapping(FlatMap),
    Sequence(Vec<FlatMap>),
}

impl Exported {
    pub fn into_mapping(self) -> Option<FlatMap> {
        match self {
            Exported::Mapping(map) => Some(map),
            Exported::Sequence(_) => None,
        }
    }

    pub fn into_sequence(self) -> Option<Vec<FlatMap>> {
        match self {
            Exported::Mapping(_) => None,
            Exported::Sequence(items) => Some(items),
        }
    }

    pub fn as_value(&self) -> Value {
        match self {
            Exported::Mapping(map) => Value::Object(map.clone()),
            Exported::Sequence(items) => {
                Value::Array(items.iter().cloned().map(Value::Object).collect())
            }
        }
    }
}

/// The mapping engine.
///
/// Owns a normalized [`Source`], a collection-mode flag, and a custom mapper
/// chain. Each instance is independent; there is no shared state and no
/// internal locking.
pub struct Mapper {
    source: Source,
    collection: bool,
    mappers: Vec<MapperRef>,
    instantiator: Arc<dyn Instantiator>,
}

impl Mapper {
    /// Create an engine over a source, with an empty [`Registry`] as the
    /// instantiator. Sufficient for the export-only paths (`to_array`,
    /// `to_json`); `to` needs target types registered, see
    /// [`Mapper::with_instantiator`].
    pub fn map(source: impl Into<Source>) -> Self {
        Self::with_instantiator(source, Arc::new(Registry::new()))
    }

    /// Create an engine over a source with an explicit instantiator.
    pub fn with_instantiator(source: impl Into<Source>, instantiator: Arc<dyn Instantiator>) -> Self {
        Self {
            source: source.into(),
            collection: false,
            mappers: Vec::new(),
            instantiator,
        }
    }

    /// Create an engine over a structured payload; its fields are exported
    /// once, here, and the payload type is never consulted again.
    pub fn from_payload(payload: &dyn ExportAll) -> Self {
        Self::map(Source::from_payload(payload))
    }

    /// Structured-payload constructor with an explicit instantiator.
    pub fn from_payload_with(payload: &dyn ExportAll, instantiator: Arc<dyn Instantiator>) -> Self {
        Self::with_instantiator(Source::from_payload(payload), instantiator)
    }

    /// Enable collection mode: every terminal operation treats the source as
    /// an ordered sequence of items. Fluent and idempotent.
    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }

    /// Replace the mapper chain wholesale. Entries are validated lazily,
    /// when dispatched, not here.
    ///
    /// Chain policy: the chain short-circuits at the first entry. The first
    /// mapper that runs produces the per-item result and later entries are
    /// never consulted.
    pub fn with<I>(mut self, mappers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MapperRef>,
    {
        self.mappers = mappers.into_iter().map(Into::into).collect();
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn is_collection(&self) -> bool {
        self.collection
    }

    /// Produce one target (single mode) or an ordered container of targets
    /// (collection mode) of the named type.
    pub fn to(&self, target_type: &str) -> Result<Mapped> {
        log::debug!(
            "mapping {} source to '{target_type}'",
            if self.collection { "sequence" } else { "single" },
        );
        let source = self.source.resolved()?;
        if self.collection {
            let items = sequence_items(&source)?;
            let collection = items
                .iter()
                .map(|item| self.map_item(item, target_type))
                .collect::<Result<MappedCollection>>()?;
            Ok(Mapped::Collection(collection))
        } else {
            let item = source.as_item();
            Ok(Mapped::One(self.map_item(&item, target_type)?))
        }
    }

    /// Project the source into plain flat-mapping form without instantiating
    /// any target type.
    pub fn to_array(&self) -> Result<Exported> {
        let source = self.source.resolved()?;
        if self.collection {
            let maps = sequence_items(&source)?
                .iter()
                .map(flatten)
                .collect::<Result<Vec<_>>>()?;
            return Ok(Exported::Sequence(maps));
        }
        match &*source {
            Source::Mapping(map) => Ok(Exported::Mapping(map.clone())),
            Source::Sequence(items) => {
                let maps = items.iter().map(flatten).collect::<Result<Vec<_>>>()?;
                Ok(Exported::Sequence(maps))
            }
            Source::Opaque(value) => Ok(Exported::Mapping(flatten(value)?)),
            // `resolved` never yields text
            Source::Text(_) => Err(Error::serialization("text source failed to resolve")),
        }
    }

    /// Serialize `to_array`'s result to JSON text. Any value the format
    /// cannot encode is a hard error, never partial output.
    pub fn to_json(&self) -> Result<String> {
        let exported = self.to_array()?;
        let text = serde_json::to_string(&exported.as_value())?;
        Ok(text)
    }

    /// Map one item: dispatch the chain if configured, otherwise run the
    /// default fill algorithm.
    fn map_item(&self, item: &Value, target_type: &str) -> Result<Box<dyn Target>> {
        // First entry wins; see `with`.
        if let Some(reference) = self.mappers.first() {
            return match reference {
                MapperRef::Named(name) => self.dispatch_named(name, item, target_type),
                MapperRef::Func(mapper) => (**mapper)(self, item),
            };
        }

        let target = match self.instantiator.construct(target_type)? {
            Instance::Target(target) => target,
            Instance::Mapper(_) => {
                return Err(Error::Configuration {
                    message: format!("'{target_type}' resolves to a mapper, not a fillable target"),
                })
            }
        };
        self.fill(target, item)
    }

    /// Resolve a named chain entry and invoke its map capability.
    fn dispatch_named(&self, name: &str, item: &Value, target_type: &str) -> Result<Box<dyn Target>> {
        if name.trim().is_empty() {
            return Err(Error::Configuration {
                message: "mapper chain entry has a blank type name".to_string(),
            });
        }
        match self.instantiator.construct(name)? {
            Instance::Mapper(mapper) => mapper.map(item, target_type),
            Instance::Target(_) => Err(Error::MapperContract {
                type_name: name.to_string(),
                message: "resolved instance does not expose a map capability".to_string(),
            }),
        }
    }

    /// Default fill: record-capable targets take the whole mapping at once;
    /// everything else gets field-by-field assignment of declared fields.
    /// Mapped data overwrites constructor-set values; undeclared keys are a
    /// silent no-op.
    fn fill(&self, mut target: Box<dyn Target>, item: &Value) -> Result<Box<dyn Target>> {
        let attributes = flatten(item)?;

        if let Some(record) = target.record_fill() {
            record.fill_from(&attributes);
            return Ok(target);
        }

        for (name, value) in &attributes {
            if target.declares_field(name) {
                target.set_field(name, value.clone());
            } else {
                log::trace!("dropping undeclared field '{name}'");
            }
        }
        Ok(target)
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("source", &self.source)
            .field("collection", &self.collection)
            .field("mappers", &self.mappers)
            .finish()
    }
}

fn sequence_items<'s>(source: &'s Source) -> Result<&'s Vec<Value>> {
    match source {
        Source::Sequence(items) => Ok(items),
        other => Err(Error::Configuration {
            message: format!(
                "collection mode requires a sequence source, got {}",
                source_kind(other)
            ),
        }),
    }
}

fn source_kind(source: &Source) -> &'static str {
    match source {
        Source::Mapping(_) => "a mapping",
        Source::Sequence(_) => "a sequence",
        Source::Text(_) => "text",
        Source::Opaque(_) => "an opaque value",
    }
}
