//! Entity registry adapter.
//!
//! Discovery consumes entity metadata only through [`EntityRegistry`]. The
//! in-memory [`StaticRegistry`] backs catalogs loaded from files and tests.

use std::collections::BTreeMap;

use nav_core::entities::EntityType;

use crate::error::RegistryError;

/// Read-only introspection over a catalog of entity types.
///
/// Implementations must list entity types in a stable order; discovery
/// relies on it for deterministic tie-breaking between equally named types.
pub trait EntityRegistry {
    /// All entity types outside `exclude_namespaces`, in stable order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unavailable`] if the registry cannot be read.
    fn list_entity_types(
        &self,
        exclude_namespaces: &[String],
    ) -> Result<Vec<EntityType>, RegistryError>;

    /// A single entity type. `name` is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such type exists.
    fn get_entity_type(&self, namespace: &str, name: &str) -> Result<EntityType, RegistryError>;

    /// Whether any entity type lives in `namespace`.
    fn has_namespace(&self, namespace: &str) -> bool;
}

/// In-memory registry keyed by `(namespace, lowercase type name)`.
///
/// Iteration order is namespace ascending, then type name ascending.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entities: BTreeMap<(String, String), EntityType>,
}

impl StaticRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an entity type. Display defaults are filled in.
    pub fn insert(&mut self, entity: EntityType) {
        let key = (entity.namespace.clone(), entity.type_name.to_lowercase());
        if self.entities.insert(key, entity.normalized()).is_some() {
            tracing::debug!("replaced duplicate entity type registration");
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<EntityType> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = EntityType>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entity in iter {
            registry.insert(entity);
        }
        registry
    }
}

impl EntityRegistry for StaticRegistry {
    fn list_entity_types(
        &self,
        exclude_namespaces: &[String],
    ) -> Result<Vec<EntityType>, RegistryError> {
        Ok(self
            .entities
            .values()
            .filter(|entity| !exclude_namespaces.contains(&entity.namespace))
            .cloned()
            .collect())
    }

    fn get_entity_type(&self, namespace: &str, name: &str) -> Result<EntityType, RegistryError> {
        self.entities
            .get(&(namespace.to_string(), name.to_lowercase()))
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                namespace: namespace.to_string(),
                type_name: name.to_string(),
            })
    }

    fn has_namespace(&self, namespace: &str) -> bool {
        self.entities.keys().any(|(ns, _)| ns == namespace)
    }
}
