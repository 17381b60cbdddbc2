//! Route-to-entity matcher.
//!
//! Resolves a route name to at most one entity type:
//!
//! ```text
//! route name ──keyword──▶ hint ──exact──▶ entity
//!                              ──hint minus trailing 's'──▶ entity
//!                              ──unique fuzzy best ≥ 0.8──▶ entity
//! (empty hint, non-generic keyword) ──same chain on the keyword──▶ entity
//! ```
//!
//! The matcher works on a snapshot of the registry taken at construction,
//! so one pass sees one consistent catalog.

use nav_config::MatchConfig;
use nav_core::entities::EntityType;
use nav_registry::{EntityRegistry, RegistryError};

use crate::hint::{RouteHint, extract_hint, is_generic_keyword};

/// Minimum similarity for a fuzzy match to be accepted.
pub const FUZZY_CUTOFF: f64 = 0.8;

/// A route name resolved to an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub hint: RouteHint,
    pub entity: EntityType,
}

pub struct EntityMatcher<'a> {
    config: &'a MatchConfig,
    /// Lowercase type name → entity, first registration in registry order wins.
    candidates: Vec<(String, EntityType)>,
}

impl<'a> EntityMatcher<'a> {
    /// Snapshot the registry's candidates outside the excluded namespaces.
    ///
    /// # Errors
    ///
    /// Returns the registry's error if it cannot be listed.
    pub fn new(registry: &dyn EntityRegistry, config: &'a MatchConfig) -> Result<Self, RegistryError> {
        let listed = registry.list_entity_types(&config.excluded_namespaces)?;
        Ok(Self::from_entities(listed, config))
    }

    #[must_use]
    pub fn from_entities(entities: Vec<EntityType>, config: &'a MatchConfig) -> Self {
        let mut candidates: Vec<(String, EntityType)> = Vec::with_capacity(entities.len());
        for entity in entities {
            if config.is_namespace_excluded(&entity.namespace) {
                continue;
            }
            let key = entity.type_name.to_lowercase();
            if candidates.iter().any(|(existing, _)| *existing == key) {
                tracing::debug!(
                    entity = %entity.qualified_name(),
                    "type name already claimed by an earlier namespace"
                );
                continue;
            }
            candidates.push((key, entity));
        }
        Self { config, candidates }
    }

    /// Match a route name to a visible entity type.
    ///
    /// Returns `None` when the route has no keyword, nothing resolves, or the
    /// resolved type is excluded by configuration.
    #[must_use]
    pub fn match_route(&self, route_name: &str) -> Option<RouteMatch> {
        let Some(hint) = extract_hint(route_name, &self.config.keyword_tokens) else {
            tracing::trace!(route_name, "no keyword in route name");
            return None;
        };

        let name = if !hint.hint.is_empty() {
            Some(hint.hint.as_str())
        } else if !is_generic_keyword(&hint.keyword) {
            Some(hint.keyword.as_str())
        } else {
            None
        };
        let entity = name.and_then(|name| self.find_entity(name))?;

        if self.config.is_namespace_excluded(&entity.namespace)
            || self.config.is_type_excluded(&entity.qualified_name())
        {
            tracing::debug!(route_name, entity = %entity.qualified_name(), "matched entity is excluded");
            return None;
        }

        tracing::debug!(route_name, hint = %hint.hint, entity = %entity.qualified_name(), "route matched");
        Some(RouteMatch {
            hint,
            entity: entity.clone(),
        })
    }

    /// Resolve a hint: exact, then trailing-`s` singular, then unique fuzzy best.
    #[must_use]
    pub fn find_entity(&self, hint: &str) -> Option<&EntityType> {
        let hint = hint.to_lowercase();
        self.exact(&hint)
            .or_else(|| hint.strip_suffix('s').and_then(|singular| self.exact(singular)))
            .or_else(|| self.fuzzy(&hint))
    }

    fn exact(&self, name: &str) -> Option<&EntityType> {
        self.candidates
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, entity)| entity)
    }

    /// Best candidate by normalized Levenshtein similarity.
    ///
    /// Rejected when below [`FUZZY_CUTOFF`] or when several candidates share
    /// the best score.
    fn fuzzy(&self, hint: &str) -> Option<&EntityType> {
        let mut best: Option<(f64, &EntityType)> = None;
        let mut tied = false;

        for (key, entity) in &self.candidates {
            let score = similarity(hint, key);
            match best {
                Some((top, _)) if (score - top).abs() < f64::EPSILON => tied = true,
                Some((top, _)) if score < top => {}
                _ => {
                    best = Some((score, entity));
                    tied = false;
                }
            }
        }

        match best {
            Some((score, entity)) if score >= FUZZY_CUTOFF && !tied => {
                tracing::debug!(hint, entity = %entity.qualified_name(), score, "fuzzy match");
                Some(entity)
            }
            Some((score, _)) if tied && score >= FUZZY_CUTOFF => {
                tracing::debug!(hint, score, "ambiguous fuzzy match rejected");
                None
            }
            _ => None,
        }
    }
}

/// Similarity in `[0, 1]` between two lowercase names.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn entities() -> Vec<EntityType> {
        vec![
            EntityType::new("auth", "User"),
            EntityType::new("documents", "Decree"),
            EntityType::new("documents", "Publication"),
            EntityType::new("documents", "Report"),
            EntityType::new("main", "Affiliate"),
            EntityType::new("main", "Status"),
            EntityType::new("main", "Tag"),
        ]
    }

    fn matched(config: &MatchConfig, route: &str) -> Option<String> {
        EntityMatcher::from_entities(entities(), config)
            .match_route(route)
            .map(|m| m.entity.qualified_name())
    }

    #[rstest]
    #[case("decree_list", Some("documents.Decree"))]
    #[case("DECREE_list", Some("documents.Decree"))]
    #[case("decrees_list", Some("documents.Decree"))]
    #[case("publication-list", Some("documents.Publication"))]
    #[case("affiliat_list", Some("main.Affiliate"))]
    #[case("status_list", Some("main.Status"))]
    #[case("statuses_list", None)]
    #[case("publications", None)]
    #[case("user_list", None)]
    #[case("list", None)]
    #[case("unknown_list", None)]
    fn matches_routes(#[case] route: &str, #[case] expected: Option<&str>) {
        let config = MatchConfig::default();
        assert_eq!(matched(&config, route).as_deref(), expected);
    }

    #[test]
    fn exact_match_wins_regardless_of_fuzzy_neighbors() {
        let config = MatchConfig::default();
        let matcher = EntityMatcher::from_entities(
            vec![EntityType::new("main", "Tag"), EntityType::new("main", "Tags")],
            &config,
        );
        assert_eq!(matcher.find_entity("tags").unwrap().type_name, "Tags");
        assert_eq!(matcher.find_entity("TAG").unwrap().type_name, "Tag");
    }

    #[test]
    fn singular_rule_strips_one_trailing_s_only() {
        let config = MatchConfig::default();
        let matcher = EntityMatcher::from_entities(entities(), &config);
        assert_eq!(matcher.find_entity("reports").unwrap().type_name, "Report");
        // "reportss" vs "report" scores 0.75, so no second strip via fuzzy either
        assert!(matcher.find_entity("reportss").is_none());
        assert!(matcher.find_entity("reportsss").is_none());
    }

    #[test]
    fn fuzzy_rejects_scores_below_cutoff() {
        let config = MatchConfig::default();
        let matcher = EntityMatcher::from_entities(entities(), &config);
        // "decr" vs "decree": distance 2 over 6 chars, similarity ~0.67
        assert!(similarity("decr", "decree") < FUZZY_CUTOFF);
        assert!(matcher.find_entity("decr").is_none());
    }

    #[test]
    fn fuzzy_rejects_ties_at_the_top() {
        let config = MatchConfig::default();
        let matcher = EntityMatcher::from_entities(
            vec![
                EntityType::new("main", "Decreea"),
                EntityType::new("main", "Decreeb"),
            ],
            &config,
        );
        // "decree" is one edit from both candidates
        assert!(similarity("decree", "decreea") >= FUZZY_CUTOFF);
        assert!(matcher.find_entity("decree").is_none());
    }

    #[test]
    fn keyword_is_tried_as_hint_when_nothing_remains() {
        let config = MatchConfig {
            keyword_tokens: vec!["report".into()],
            ..Default::default()
        };
        assert_eq!(matched(&config, "report").as_deref(), Some("documents.Report"));
        assert_eq!(matched(&config, "_report_").as_deref(), Some("documents.Report"));
    }

    #[test]
    fn keyword_fallback_skips_generic_keywords() {
        let config = MatchConfig {
            keyword_tokens: vec!["index".into()],
            ..Default::default()
        };
        let matcher = EntityMatcher::from_entities(vec![EntityType::new("main", "Index")], &config);
        assert!(matcher.match_route("index").is_none());
    }

    #[test]
    fn excluded_types_are_discarded_after_matching() {
        let config = MatchConfig {
            excluded_types: vec!["documents.Decree".into()],
            ..Default::default()
        };
        assert_eq!(matched(&config, "decree_list"), None);
        assert_eq!(matched(&config, "report_list").as_deref(), Some("documents.Report"));
    }

    #[test]
    fn first_namespace_claims_a_shared_type_name() {
        let config = MatchConfig::default();
        let matcher = EntityMatcher::from_entities(
            vec![
                EntityType::new("archive", "Decree"),
                EntityType::new("documents", "Decree"),
            ],
            &config,
        );
        let found = matcher.match_route("decree_list").unwrap();
        assert_eq!(found.entity.namespace, "archive");
        assert_eq!(found.hint.hint, "decree");
    }
}
