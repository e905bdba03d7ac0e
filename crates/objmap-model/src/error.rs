//! Error types shared by the objmap crates.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while declaring types or mapping values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// Strict mapping found required target fields missing on the source.
    #[error("missing required fields: {}", .missing.join(", "))]
    Validation {
        /// Missing field names, in target declaration order.
        missing: Vec<String>,
    },

    /// No descriptor was declared for the requested target type.
    #[error("unknown target type: {0}")]
    UnknownType(String),

    /// Type names must not be blank.
    #[error("invalid type name: {0:?}")]
    InvalidTypeName(String),

    /// The source nests deeper than the configured limit.
    #[error("maximum mapping depth {max_depth} exceeded at {path}")]
    DepthExceeded { max_depth: usize, path: String },

    /// Converting between `Value` and a serde type failed.
    #[error("conversion error: {0}")]
    Conversion(String),

    /// A schema document could not be parsed.
    #[error("failed to parse schema {origin}: {source}")]
    SchemaParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A schema document declared something inconsistent.
    #[error("invalid schema {origin}: {message}")]
    InvalidSchema { origin: String, message: String },

    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process-wide registry can only be installed once.
    #[error("global metadata registry is already installed")]
    GlobalRegistryInstalled,

    /// No process-wide registry has been installed yet.
    #[error("global metadata registry is not installed")]
    GlobalRegistryMissing,
}

impl MapError {
    /// Returns true for strict-mode required-field failures.
    ///
    /// Callers exposing the mapper behind a request boundary report these as
    /// client errors; everything else is a programming or configuration error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Missing field names for a validation failure, empty otherwise.
    #[must_use]
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::Validation { missing } => missing,
            _ => &[],
        }
    }
}

/// Result type alias for mapping operations.
pub type Result<T> = std::result::Result<T, MapError>;
