//! Remap Core - object-transformation engine for flat mappings
//!
//! This crate fills caller-specified target types from a source value (a
//! flat mapping, a structured payload, a sequence of items, or JSON text)
//! by copying matching fields, optionally routing through a chain of custom
//! mappers, and optionally re-serializing to a plain mapping or JSON text.
//!
//! # Main Components
//!
//! - **Error Handling**: error taxonomy using `thiserror` and `anyhow`
//! - **Source Normalization**: raw inputs become one of four canonical shapes
//! - **Mapping Engine**: configure-then-execute `Mapper` with three terminal
//!   operations (`to`, `to_array`, `to_json`)
//! - **Instantiation**: target and mapper types constructed by name through
//!   a pluggable `Instantiator`
//!
//! # Example
//!
//! ```
//! use remap_core::{Mapper, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<String> {
//!     Mapper::map(json!({"code": "LPK", "city": "Lipetsk"})).to_json()
//! }
//! ```

pub mod error;
pub mod instantiate;
pub mod mapping;
pub mod source;
pub mod target;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use instantiate::{Instance, Instantiator, Registry};
pub use mapping::{CustomMapper, Exported, Mapped, MappedCollection, Mapper, MapperFn, MapperRef};
pub use source::{ExportAll, FlatMap, Source};
pub use target::{RecordFill, Target};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
