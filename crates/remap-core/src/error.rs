//! Error types for the Remap core library
//!
//! This module defines the error handling system for Remap, using thiserror
//! for ergonomic error definitions and anyhow as the opaque cause type that
//! external instantiators may attach to their failures.

use thiserror::Error;

/// Main error type for Remap operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configured mapper chain entry is unusable, or a terminal operation
    /// was asked to iterate a source that is not a sequence. Signaled at
    /// dispatch time, never when the chain is configured.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A named mapper type was resolved but does not expose the required
    /// `map` capability.
    #[error("Mapper contract violation: {type_name} - {message}")]
    MapperContract { type_name: String, message: String },

    /// A target or mapper type could not be constructed. Propagated
    /// unchanged from the instantiator.
    #[error("Instantiation failed: {type_name} - {message}")]
    Instantiation {
        type_name: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors, including values that cannot
    /// be represented as a flat mapping.
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl Error {
    /// Shorthand for an instantiation failure without an underlying cause.
    pub fn instantiation(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Instantiation {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a serialization failure without an underlying cause.
    pub fn serialization(message: impl Into<String>) -> Self {
        Error::Serialization {
            message: message.into(),
            source: None,
        }
    }
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
