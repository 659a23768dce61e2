//! Target capabilities for the default fill algorithm
//!
//! Targets declare their assignable field set explicitly instead of relying
//! on runtime introspection: the fill algorithm asks `declares_field` before
//! every assignment, and unknown keys in the source are silently dropped.
//! Record-like targets opt into bulk assignment through [`RecordFill`].
//!
//! Copyright (c) 2025 Remap Contributors
//! Licensed under the Apache-2.0 license

use crate::source::FlatMap;
use serde_json::Value;
use std::any::Any;

/// Bulk-assignment capability for record/model-like targets.
///
/// When a target exposes this capability, the engine hands it the entire
/// flat mapping verbatim and performs no field-existence checks of its own;
/// whatever casting or guarding happens is the record's concern.
pub trait RecordFill {
    fn fill_from(&mut self, attributes: &FlatMap);
}

/// An object the engine can produce and fill.
///
/// Implementations are ordinary structs; `declares_field` and `set_field`
/// together form the registration step that replaces reflective property
/// assignment. The `Any` plumbing lets callers downcast a mapped result
/// back to its concrete type.
pub trait Target: Any {
    /// Whether this target declares a field with the given name.
    fn declares_field(&self, name: &str) -> bool;

    /// Assign one declared field. Called only for names that
    /// `declares_field` accepted.
    fn set_field(&mut self, name: &str, value: Value);

    /// Capability test for record-like bulk assignment.
    fn record_fill(&mut self) -> Option<&mut dyn RecordFill> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn Target {
    /// Downcast a borrowed target to its concrete type.
    pub fn downcast_ref<T: Target>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
