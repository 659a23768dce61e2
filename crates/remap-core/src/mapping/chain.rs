//! Custom mapper chain entries
//!
//! A chain entry is either a named type resolved through the engine's
//! instantiator, or an inline function receiving the engine and the item.
//! Entries are validated lazily, when they are dispatched, never when the
//! chain is configured.
//!
//! Copyright (c) 2025 Remap Contributors
//! Licensed under the Apache-2.0 license

use crate::target::Target;
use crate::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::engine::Mapper;

/// Capability a named mapper type must expose once constructed.
pub trait CustomMapper {
    /// Produce a target for one item. Receives the item and the target type
    /// name the caller asked for.
    fn map(&self, item: &Value, target_type: &str) -> Result<Box<dyn Target>>;
}

/// Inline mapper function: receives the engine and the item.
pub type MapperFn = Arc<dyn Fn(&Mapper, &Value) -> Result<Box<dyn Target>> + Send + Sync>;

/// One entry in the mapper chain.
#[derive(Clone)]
pub enum MapperRef {
    /// Named external type, resolved via the instantiator at dispatch time.
    Named(String),
    /// Inline function used as-is.
    Func(MapperFn),
}

impl MapperRef {
    pub fn named(type_name: impl Into<String>) -> Self {
        MapperRef::Named(type_name.into())
    }

    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Mapper, &Value) -> Result<Box<dyn Target>> + Send + Sync + 'static,
    {
        MapperRef::Func(Arc::new(f))
    }
}

impl From<&str> for MapperRef {
    fn from(type_name: &str) -> Self {
        MapperRef::Named(type_name.to_string())
    }
}

impl From<String> for MapperRef {
    fn from(type_name: String) -> Self {
        MapperRef::Named(type_name)
    }
}

impl fmt::Debug for MapperRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            MapperRef::Func(_) => f.debug_tuple("Func").field(&"<fn>").finish(),
        }
    }
}
