//! Discovery error types.

use nav_registry::RegistryError;
use thiserror::Error;

/// Errors that abort a discovery request.
///
/// Per-route and per-entity problems (no match, failed schema lookups,
/// dangling relation targets) never surface here; they are skipped.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The registry failed, or an explicitly named entity type does not exist.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An explicitly requested namespace has no entity types.
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),
}
