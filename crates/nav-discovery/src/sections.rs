//! Section discovery: bindings for every section entity, with subsections.

use nav_config::MatchConfig;
use nav_core::bindings::{EntityBindings, SectionBinding, SubsectionBinding};
use nav_core::entities::EntityType;
use nav_registry::{EntityRegistry, SchemaLookup};

use crate::classify::ChildClassifier;
use crate::error::DiscoveryError;
use crate::resolve::BindingResolver;

pub struct SectionDiscovery<'a> {
    registry: &'a dyn EntityRegistry,
    lookup: &'a dyn SchemaLookup,
    config: &'a MatchConfig,
}

impl<'a> SectionDiscovery<'a> {
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

    /// Section bindings in registry order.
    ///
    /// Without a namespace, every namespace outside `excluded_namespaces` is
    /// scanned. Child entities are left out unless `include_children` is set;
    /// they still show up as subsections of their parents.
    ///
    /// # Errors
    ///
    /// [`DiscoveryError::UnknownNamespace`] when `namespace` names nothing in
    /// the registry, [`DiscoveryError::Registry`] when the registry fails.
    pub fn discover(
        &self,
        namespace: Option<&str>,
        include_children: bool,
    ) -> Result<Vec<SectionBinding>, DiscoveryError> {
        if let Some(namespace) = namespace {
            self.require_namespace(namespace)?;
        }

        let snapshot = self.registry.list_entity_types(&[])?;
        let resolver = BindingResolver::new(self.lookup);
        let classifier = ChildClassifier::new(&snapshot, &resolver);

        let mut sections = Vec::new();
        for entity in &snapshot {
            let in_scope = match namespace {
                Some(namespace) => entity.namespace == namespace,
                None => !self.config.is_namespace_excluded(&entity.namespace),
            };
            if !in_scope || !entity.is_discoverable_section() {
                continue;
            }

            let is_child = classifier.is_child(entity);
            if is_child && !include_children {
                tracing::debug!(entity = %entity.qualified_name(), "child section skipped");
                continue;
            }

            sections.push(SectionBinding {
                entity: entity.clone(),
                form_schema: resolver.form(entity),
                table_schema: resolver.table(entity),
                filter_schema: resolver.filter(entity),
                subsections: subsections(entity, &snapshot, &resolver, &classifier),
                is_child,
            });
        }

        Ok(sections)
    }

    /// Lowercase key of the first standalone section in `namespace`,
    /// suitable for [`SectionDiscovery::resolve_entity`] and URLs.
    ///
    /// # Errors
    ///
    /// Same as [`SectionDiscovery::discover`].
    pub fn default_section(&self, namespace: &str) -> Result<Option<String>, DiscoveryError> {
        Ok(self
            .discover(Some(namespace), false)?
            .into_iter()
            .next()
            .map(|section| section.entity.type_name.to_lowercase()))
    }

    /// Bindings for one named entity type, section or not.
    ///
    /// # Errors
    ///
    /// [`DiscoveryError::Registry`] wrapping `NotFound` for an unknown type.
    pub fn resolve_entity(
        &self,
        namespace: &str,
        type_name: &str,
    ) -> Result<EntityBindings, DiscoveryError> {
        let entity = self.registry.get_entity_type(namespace, type_name)?;
        let resolver = BindingResolver::new(self.lookup);
        Ok(EntityBindings {
            form_schema: resolver.form(&entity),
            table_schema: resolver.table(&entity),
            filter_schema: resolver.filter(&entity),
            entity,
        })
    }

    fn require_namespace(&self, namespace: &str) -> Result<(), DiscoveryError> {
        if self.registry.has_namespace(namespace) {
            Ok(())
        } else {
            Err(DiscoveryError::UnknownNamespace(namespace.to_string()))
        }
    }
}

/// Children linked from `parent`, in relation declaration order.
fn subsections(
    parent: &EntityType,
    snapshot: &[EntityType],
    resolver: &BindingResolver<'_>,
    classifier: &ChildClassifier<'_>,
) -> Vec<SubsectionBinding> {
    let mut out = Vec::new();
    for relation in parent.forward_many_to_many() {
        let Some(target) = snapshot
            .iter()
            .find(|e| relation.target.refers_to(&e.namespace, &e.type_name))
        else {
            tracing::warn!(
                entity = %parent.qualified_name(),
                target = %relation.target,
                "many-to-many target is not in the registry; subsection skipped"
            );
            continue;
        };
        if !classifier.is_child(target) {
            continue;
        }
        out.push(SubsectionBinding {
            entity: target.clone(),
            related_field: relation.accessor_name.clone(),
            form_schema: resolver.form(target),
        });
    }
    out
}
