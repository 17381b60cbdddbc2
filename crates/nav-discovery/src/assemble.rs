//! Sidebar assembly: routes in, ordered navigation out.

use nav_config::MatchConfig;
use nav_core::entities::EntityType;
use nav_core::navigation::{DEFAULT_ORDER, Sidebar, SidebarItem};
use nav_core::routes::RouteNode;
use nav_registry::{EntityRegistry, SchemaLookup};

use crate::classify::ChildClassifier;
use crate::error::DiscoveryError;
use crate::matcher::EntityMatcher;
use crate::resolve::BindingResolver;
use crate::scan::flatten_routes;

pub struct SidebarAssembler<'a> {
    registry: &'a dyn EntityRegistry,
    lookup: &'a dyn SchemaLookup,
    config: &'a MatchConfig,
}

impl<'a> SidebarAssembler<'a> {
    #[must_use]
    pub const fn new(
        registry: &'a dyn EntityRegistry,
        lookup: &'a dyn SchemaLookup,
        config: &'a MatchConfig,
    ) -> Self {
        Self {
            registry,
            lookup,
            config,
        }
    }

    /// Build the sidebar for a route tree.
    ///
    /// Each route that matches a standalone section contributes one item;
    /// an override keyed by that route name is applied to that item only.
    /// Static groups follow verbatim and the items are sorted by
    /// `(order, label)`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Registry`] if the registry cannot be listed.
    /// Routes that fail to match are skipped, never reported.
    pub fn assemble(&self, routes: &[RouteNode]) -> Result<Sidebar, DiscoveryError> {
        if !self.config.enabled {
            tracing::debug!("sidebar discovery disabled");
            return Ok(Sidebar::default());
        }

        // One snapshot per pass: the classifier needs every namespace, the
        // matcher drops the excluded ones itself.
        let snapshot = self.registry.list_entity_types(&[])?;
        let matcher = EntityMatcher::from_entities(snapshot.clone(), self.config);
        let resolver = BindingResolver::new(self.lookup);
        let classifier = ChildClassifier::new(&snapshot, &resolver);

        let mut items: Vec<SidebarItem> = Vec::new();
        for route in flatten_routes(routes) {
            let Some(found) = matcher.match_route(&route.name) else {
                continue;
            };
            if classifier.is_child(&found.entity) {
                tracing::debug!(
                    route_name = %route.name,
                    entity = %found.entity.qualified_name(),
                    "child entity kept out of the sidebar"
                );
                continue;
            }

            let mut item = self.item_for(&route.name, &found.entity);
            if let Some(item_override) = self.config.override_for(&route.name) {
                item.apply_override(item_override);
            }
            items.push(item);
        }

        items.sort_by(SidebarItem::display_cmp);
        tracing::debug!(items = items.len(), "sidebar assembled");

        Ok(Sidebar {
            items,
            extra_groups: self.config.extra_groups.clone(),
        })
    }

    fn item_for(&self, route_name: &str, entity: &EntityType) -> SidebarItem {
        SidebarItem {
            route_name: route_name.to_string(),
            label: entity.sidebar_label().to_string(),
            icon: entity
                .sidebar_icon
                .clone()
                .unwrap_or_else(|| self.config.default_icon.clone()),
            order: entity.sidebar_order.unwrap_or(DEFAULT_ORDER),
            namespace: entity.namespace.clone(),
            type_name: entity.type_name.clone(),
            required_permissions: vec![entity.view_permission()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::navigation::ItemOverride;
    use nav_registry::{SchemaCatalog, StaticRegistry};
    use pretty_assertions::assert_eq;

    fn registry() -> StaticRegistry {
        let mut report = EntityType::new("documents", "Report").section();
        report.sidebar_icon = Some("bi-file".into());
        report.sidebar_label = Some("Monthly reports".into());
        [
            EntityType::new("documents", "Decree").section(),
            report,
            EntityType::new("documents", "Publication").section().with_order(10),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn items_carry_entity_defaults() {
        let registry = registry();
        let lookup = SchemaCatalog::new();
        let config = MatchConfig::default();
        let sidebar = SidebarAssembler::new(&registry, &lookup, &config)
            .assemble(&[RouteNode::route("decree_list"), RouteNode::route("report_list")])
            .unwrap();

        assert_eq!(
            sidebar.items,
            vec![
                SidebarItem {
                    route_name: "decree_list".into(),
                    label: "Decrees".into(),
                    icon: "bi-list".into(),
                    order: 100,
                    namespace: "documents".into(),
                    type_name: "Decree".into(),
                    required_permissions: vec!["documents.view_decree".into()],
                },
                SidebarItem {
                    route_name: "report_list".into(),
                    label: "Monthly reports".into(),
                    icon: "bi-file".into(),
                    order: 100,
                    namespace: "documents".into(),
                    type_name: "Report".into(),
                    required_permissions: vec!["documents.view_report".into()],
                },
            ]
        );
    }

    #[test]
    fn declared_order_sorts_first() {
        let registry = registry();
        let lookup = SchemaCatalog::new();
        let config = MatchConfig::default();
        let sidebar = SidebarAssembler::new(&registry, &lookup, &config)
            .assemble(&[
                RouteNode::route("decree_list"),
                RouteNode::route("publication_list"),
            ])
            .unwrap();
        let labels: Vec<&str> = sidebar.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Publications", "Decrees"]);
    }

    #[test]
    fn override_on_a_route_without_item_touches_nothing() {
        let registry = registry();
        let lookup = SchemaCatalog::new();
        let mut config = MatchConfig::default();
        config.overrides.insert(
            "login".into(),
            ItemOverride {
                label: Some("Sign in".into()),
                ..Default::default()
            },
        );
        let sidebar = SidebarAssembler::new(&registry, &lookup, &config)
            .assemble(&[RouteNode::route("decree_list"), RouteNode::route("login")])
            .unwrap();
        assert_eq!(sidebar.items[0].label, "Decrees");
    }

    #[test]
    fn disabled_yields_empty_sidebar() {
        let registry = registry();
        let lookup = SchemaCatalog::new();
        let config = MatchConfig {
            enabled: false,
            ..Default::default()
        };
        let sidebar = SidebarAssembler::new(&registry, &lookup, &config)
            .assemble(&[RouteNode::route("decree_list")])
            .unwrap();
        assert!(sidebar.is_empty());
    }
}
