//! Type instantiation for targets and named mappers
//!
//! The engine never constructs target types itself; it asks an
//! [`Instantiator`] to build them by name, and the instantiator owns
//! whatever dependency resolution its types need. [`Registry`] is the
//! default implementation: a name→factory table whose factories may call
//! back into the registry to resolve their own construction-time
//! dependencies.
//!
//! Copyright (c) 2025 Remap Contributors
//! Licensed under the Apache-2.0 license

use crate::mapping::CustomMapper;
use crate::target::Target;
use crate::{Error, Result};
use std::collections::HashMap;

/// A constructed instance: either a fillable target or a custom mapper.
pub enum Instance {
    Target(Box<dyn Target>),
    Mapper(Box<dyn CustomMapper>),
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instance::Target(_) => f.write_str("Instance::Target(..)"),
            Instance::Mapper(_) => f.write_str("Instance::Mapper(..)"),
        }
    }
}

/// External collaborator that constructs named types.
///
/// Failures (unknown name, unsatisfiable dependencies) surface as
/// [`Error::Instantiation`] and propagate out of the engine unchanged.
pub trait Instantiator {
    fn construct(&self, type_name: &str) -> Result<Instance>;
}

type Factory = Box<dyn Fn(&Registry) -> Result<Instance> + Send + Sync>;

/// Name→factory registry, the default [`Instantiator`].
///
/// Factories receive the registry itself, so a target whose constructor
/// needs another registered type can resolve it during construction.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, Factory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target type under a name.
    pub fn register_target<F, T>(&mut self, type_name: impl Into<String>, factory: F)
    where
        F: Fn(&Registry) -> Result<T> + Send + Sync + 'static,
        T: Target,
    {
        self.factories.insert(
            type_name.into(),
            Box::new(move |registry| Ok(Instance::Target(Box::new(factory(registry)?)))),
        );
    }

    /// Register a custom mapper type under a name.
    pub fn register_mapper<F, M>(&mut self, type_name: impl Into<String>, factory: F)
    where
        F: Fn(&Registry) -> Result<M> + Send + Sync + 'static,
        M: CustomMapper + 'static,
    {
        self.factories.insert(
            type_name.into(),
            Box::new(move |registry| Ok(Instance::Mapper(Box::new(factory(registry)?)))),
        );
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }
}

impl Instantiator for Registry {
    fn construct(&self, type_name: &str) -> Result<Instance> {
        match self.factories.get(type_name) {
            Some(factory) => factory(self),
            None => Err(Error::instantiation(type_name, "type is not registered")),
        }
    }
}
