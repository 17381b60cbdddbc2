//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_catalog_path() -> PathBuf {
    PathBuf::from("navkit.toml")
}

fn default_namespace() -> String {
    "main".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Catalog file with entities, schemas and routes (`.toml` or `.json`).
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Persisted settings file holding the discovery toggle (`enabled = bool`).
    #[serde(default)]
    pub toggle_path: Option<PathBuf>,

    /// Namespace used by `default-section` when none is given.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            toggle_path: None,
            default_namespace: default_namespace(),
        }
    }
}
