//! The mapping engine
//!
//! This module contains the engine itself ([`engine::Mapper`]), the custom
//! mapper chain ([`chain`]), and the first-class result container
//! ([`collection::MappedCollection`]).
//!
//! Copyright (c) 2025 Remap Contributors
//! Licensed under the Apache-2.0 license

pub mod chain;
pub mod collection;
pub mod engine;

pub use chain::{CustomMapper, MapperFn, MapperRef};
pub use collection::MappedCollection;
pub use engine::{Exported, Mapped, Mapper};
