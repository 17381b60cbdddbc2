//! Cross-cutting error types for navkit.
//!
//! Domain-specific errors (`RegistryError`, `LookupError`, `DiscoveryError`,
//! `ConfigError`) are defined in their respective crates. Everything converges
//! into `anyhow::Error` in `nav-cli`.

use thiserror::Error;

/// Errors raised by the core types themselves.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (names, references, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
