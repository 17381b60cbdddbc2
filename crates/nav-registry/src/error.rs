//! Registry and schema lookup error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from an entity registry adapter.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No entity type with this name in this namespace.
    #[error("entity type not found: {namespace}.{type_name}")]
    NotFound {
        namespace: String,
        type_name: String,
    },

    /// The registry cannot be read. Fatal for a discovery pass.
    #[error("entity registry unavailable: {0}")]
    Unavailable(String),

    /// A catalog document could not be parsed.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A catalog file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog files must be `.toml` or `.json`.
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

/// Errors from a schema lookup provider.
///
/// Discovery swallows every variant and falls through to the next strategy;
/// they only surface in logs.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Nothing is registered under the path.
    #[error("schema not found: {0}")]
    NotFound(String),

    /// Something is registered under the path, but of another kind.
    #[error("schema at {path} is a {found}, expected a {expected}")]
    KindMismatch {
        path: String,
        expected: nav_core::enums::SchemaKind,
        found: nav_core::enums::SchemaKind,
    },

    /// The path itself is malformed (empty, or has no segments).
    #[error("invalid schema path: '{0}'")]
    Invalid(String),
}
