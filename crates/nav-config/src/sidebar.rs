//! Sidebar discovery configuration (`[sidebar]` section).

use std::collections::BTreeMap;

use nav_core::entities::EntityRef;
use nav_core::navigation::{ItemOverride, SidebarGroup};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_enabled() -> bool {
    true
}

fn default_keyword_tokens() -> Vec<String> {
    vec!["list".to_string()]
}

fn default_excluded_namespaces() -> Vec<String> {
    ["admin", "auth", "contenttypes", "sessions"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_icon() -> String {
    "bi-list".to_string()
}

/// Default lifetime, in seconds, for an external sidebar cache.
const fn default_cache_timeout_secs() -> u64 {
    3600
}

/// Matching configuration for one discovery pass.
///
/// `keyword_tokens` is ordered: the first token contained in a route name wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchConfig {
    /// Discovery on/off. Disabled discovery yields an empty sidebar.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Substrings that mark a route as a listing route (e.g. `list`).
    #[serde(default = "default_keyword_tokens")]
    pub keyword_tokens: Vec<String>,

    /// Namespaces never matched or shown.
    #[serde(default = "default_excluded_namespaces")]
    pub excluded_namespaces: Vec<String>,

    /// Qualified `namespace.TypeName` entries never shown.
    #[serde(default)]
    pub excluded_types: Vec<String>,

    /// Icon for entities that declare none.
    #[serde(default = "default_icon")]
    pub default_icon: String,

    /// Static groups appended verbatim after discovered items.
    #[serde(default)]
    pub extra_groups: Vec<SidebarGroup>,

    /// Per-route-name overrides of discovered items.
    #[serde(default)]
    pub overrides: BTreeMap<String, ItemOverride>,

    /// Lifetime for an external cache of the result. Not enforced here.
    #[serde(default = "default_cache_timeout_secs")]
    pub cache_timeout_secs: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            keyword_tokens: default_keyword_tokens(),
            excluded_namespaces: default_excluded_namespaces(),
            excluded_types: Vec::new(),
            default_icon: default_icon(),
            extra_groups: Vec::new(),
            overrides: BTreeMap::new(),
            cache_timeout_secs: default_cache_timeout_secs(),
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn is_namespace_excluded(&self, namespace: &str) -> bool {
        self.excluded_namespaces.iter().any(|ns| ns == namespace)
    }

    #[must_use]
    pub fn is_type_excluded(&self, qualified_name: &str) -> bool {
        self.excluded_types.iter().any(|t| t == qualified_name)
    }

    #[must_use]
    pub fn override_for(&self, route_name: &str) -> Option<&ItemOverride> {
        self.overrides.get(route_name)
    }

    /// Reject values that would make every route match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for empty keyword tokens or
    /// malformed `excluded_types` entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.keyword_tokens.iter().position(|t| t.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("sidebar.keyword_tokens[{index}]"),
                reason: "keyword tokens must not be empty".into(),
            });
        }
        for (index, qualified) in self.excluded_types.iter().enumerate() {
            EntityRef::parse(qualified).map_err(|err| ConfigError::InvalidValue {
                field: format!("sidebar.excluded_types[{index}]"),
                reason: err.to_string(),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = MatchConfig::default();
        assert!(config.enabled);
        assert_eq!(config.keyword_tokens, vec!["list"]);
        assert!(config.is_namespace_excluded("auth"));
        assert!(!config.is_namespace_excluded("documents"));
        assert_eq!(config.default_icon, "bi-list");
        assert_eq!(config.cache_timeout_secs, 3600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_keyword_is_invalid() {
        let config = MatchConfig {
            keyword_tokens: vec!["list".into(), "  ".into()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "sidebar.keyword_tokens[1]"));
    }

    #[test]
    fn unqualified_excluded_type_is_invalid() {
        let config = MatchConfig {
            excluded_types: vec!["Decree".into()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn excluded_type_needs_both_halves() {
        for bad in [".Decree", "documents."] {
            let config = MatchConfig {
                excluded_types: vec!["documents.Report".into(), bad.into()],
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref field, ref reason }
                    if field == "sidebar.excluded_types[1]" && reason.contains(bad)
            ));
        }
    }
}
