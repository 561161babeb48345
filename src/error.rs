//! Typed errors for setter-builder-gen.
//!
//! Shape violations on tagged elements are not errors: they become
//! [`ValidationFailure`](crate::model::ValidationFailure) records. The types
//! here cover what aborts a round.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for generation rounds.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The file sink failed to persist a generated source.
    #[error("Failed to write generated source {target}: {source}")]
    Sink {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Error while rendering a builder.
    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),

    /// Error while reading element metadata.
    #[error("Metadata source error: {0}")]
    Source(#[from] SourceError),

    /// Error while building a configuration.
    #[error("Builder error: {0}")]
    Builder(#[from] BuilderError),
}

/// Error while rendering builder source text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// Owner name is empty or contains an empty segment.
    #[error("Malformed owner type name '{owner}': {reason}")]
    MalformedOwner { owner: String, reason: &'static str },
}

/// Error while reading tagged element metadata.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Metadata file not found.
    #[error("Metadata file not found: {0}")]
    NotFound(PathBuf),

    /// Invalid JSON in metadata file.
    #[error("Invalid element on line {line}: {reason}")]
    InvalidJson { line: usize, reason: String },

    /// IO error while reading metadata.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised by generated configuration builders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// A field that must not be empty was set to an empty value.
    #[error("{builder}: field '{field}' must not be empty")]
    EmptyField {
        builder: &'static str,
        field: &'static str,
    },
}

/// Result type alias using setter-builder-gen's Error.
pub type GenResult<T> = std::result::Result<T, Error>;
