//! Persisted discovery toggle.
//!
//! The toggle lives in a small TOML settings file (`enabled = true`). It is
//! read once per pass and threaded into [`MatchConfig`](crate::MatchConfig)
//! by the caller. A toggle that cannot be read counts as enabled.

use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

#[derive(Debug, Deserialize)]
struct ToggleFile {
    enabled: bool,
}

/// Read the persisted toggle.
///
/// # Errors
///
/// Returns [`ConfigError::Toggle`] if the file is missing, unreadable, or
/// lacks a boolean `enabled` key.
pub fn load_toggle(path: &Path) -> Result<bool, ConfigError> {
    let toggle_error = |reason: String| ConfigError::Toggle {
        path: path.to_path_buf(),
        reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| toggle_error(e.to_string()))?;
    let parsed: ToggleFile = toml::from_str(&raw).map_err(|e| toggle_error(e.to_string()))?;
    Ok(parsed.enabled)
}

/// Collapse a toggle lookup into a flag, falling back to enabled on failure.
#[must_use]
pub fn enabled_or_fallback(lookup: Result<bool, ConfigError>) -> bool {
    lookup.unwrap_or_else(|error| {
        tracing::warn!(%error, "discovery toggle unavailable; assuming enabled");
        true
    })
}
