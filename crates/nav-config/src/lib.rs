//! # nav-config
//!
//! Layered configuration loading for navkit using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NAVKIT_*` prefix, `__` as separator)
//! 2. Project-level `.navkit/config.toml`
//! 3. User-level `~/.config/navkit/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NAVKIT_SIDEBAR__DEFAULT_ICON` -> `sidebar.default_icon`,
//! `NAVKIT_GENERAL__CATALOG_PATH` -> `general.catalog_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use nav_config::NavConfig;
//!
//! let config = NavConfig::load_with_dotenv().expect("config");
//! let sidebar = config.effective_sidebar();
//! if sidebar.enabled {
//!     println!("matching on {:?}", sidebar.keyword_tokens);
//! }
//! ```

mod error;
mod general;
mod sidebar;
pub mod toggle;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use sidebar::MatchConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NavConfig {
    #[serde(default)]
    pub sidebar: MatchConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NavConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`NavConfig::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit config file layered above the discovered ones
    /// but still below environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let figment = Self::file_layers()
            .merge(Toml::file(path))
            .merge(Env::prefixed("NAVKIT_").split("__"));
        Self::from_figment(figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        Self::file_layers().merge(Env::prefixed("NAVKIT_").split("__"))
    }

    fn file_layers() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".navkit/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.sidebar.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("navkit").join("config.toml"))
    }

    /// The sidebar config for one pass, with the persisted toggle applied.
    ///
    /// Without a `toggle_path` the configured `enabled` flag is used as-is.
    /// With one, the file decides; an unreadable file counts as enabled.
    #[must_use]
    pub fn effective_sidebar(&self) -> MatchConfig {
        let mut sidebar = self.sidebar.clone();
        if let Some(path) = &self.general.toggle_path {
            sidebar.enabled = toggle::enabled_or_fallback(toggle::load_toggle(path));
        }
        sidebar
    }
}
