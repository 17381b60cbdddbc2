use nav_config::MatchConfig;
use nav_core::bindings::{EntityBindings, SectionBinding};
use nav_core::entities::EntityType;
use nav_core::navigation::Sidebar;
use nav_core::routes::{RouteDescriptor, RouteNode};
use nav_registry::{EntityRegistry, SchemaLookup};

use crate::assemble::SidebarAssembler;
use crate::classify::ChildClassifier;
use crate::error::DiscoveryError;
use crate::matcher::{EntityMatcher, RouteMatch};
use crate::resolve::BindingResolver;
use crate::scan::flatten_routes;
use crate::sections::SectionDiscovery;

/// Entry point bundling the registry, schema lookup and match configuration.
///
/// Every call takes a fresh registry snapshot; nothing is cached between calls.
#[derive(Clone, Copy)]
pub struct Discovery<'a> {
    registry: &'a dyn EntityRegistry,
    lookup: &'a dyn SchemaLookup,
    config: &'a MatchConfig,
}

impl<'a> Discovery<'a> {
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

    /// # Errors
    ///
    /// See [`SidebarAssembler::assemble`].
    pub fn sidebar(&self, routes: &[RouteNode]) -> Result<Sidebar, DiscoveryError> {
        SidebarAssembler::new(self.registry, self.lookup, self.config).assemble(routes)
    }

    /// # Errors
    ///
    /// See [`SectionDiscovery::discover`].
    pub fn sections(
        &self,
        namespace: Option<&str>,
        include_children: bool,
    ) -> Result<Vec<SectionBinding>, DiscoveryError> {
        self.section_discovery().discover(namespace, include_children)
    }

    /// # Errors
    ///
    /// See [`SectionDiscovery::default_section`].
    pub fn default_section(&self, namespace: &str) -> Result<Option<String>, DiscoveryError> {
        self.section_discovery().default_section(namespace)
    }

    /// # Errors
    ///
    /// See [`SectionDiscovery::resolve_entity`].
    pub fn resolve_entity(
        &self,
        namespace: &str,
        type_name: &str,
    ) -> Result<EntityBindings, DiscoveryError> {
        self.section_discovery().resolve_entity(namespace, type_name)
    }

    /// Match a single route name against the current registry.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Registry`] if the registry cannot be listed.
    pub fn match_route(&self, route_name: &str) -> Result<Option<RouteMatch>, DiscoveryError> {
        let matcher = EntityMatcher::new(self.registry, self.config)?;
        Ok(matcher.match_route(route_name))
    }

    /// Classify one entity against the current registry.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Registry`] if the registry cannot be listed.
    pub fn is_child(&self, entity: &EntityType) -> Result<bool, DiscoveryError> {
        let snapshot = self.registry.list_entity_types(&[])?;
        let resolver = BindingResolver::new(self.lookup);
        Ok(ChildClassifier::new(&snapshot, &resolver).is_child(entity))
    }

    #[must_use]
    pub fn routes(&self, routes: &[RouteNode]) -> Vec<RouteDescriptor> {
        flatten_routes(routes)
    }

    const fn section_discovery(&self) -> SectionDiscovery<'a> {
        SectionDiscovery::new(self.registry, self.lookup, self.config)
    }
}
