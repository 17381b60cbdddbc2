//! Catalog documents: entities, authored schemas and the route tree in one file.
//!
//! ```toml
//! [[entities]]
//! namespace = "documents"
//! type_name = "Decree"
//! is_section = true
//!
//! [[schemas]]
//! path = "documents.forms.DecreeForm"
//! name = "DecreeForm"
//! kind = "form"
//! fields = ["number", "date"]
//!
//! [[routes]]
//! name = "decree_list"
//! ```

use std::path::Path;

use nav_core::entities::EntityType;
use nav_core::routes::RouteNode;
use nav_core::schema::SchemaDefinition;
use serde::{Deserialize, Serialize};

use crate::entities::StaticRegistry;
use crate::error::RegistryError;
use crate::schemas::SchemaCatalog;

/// An authored schema together with the path it is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub path: String,
    #[serde(flatten)]
    pub definition: SchemaDefinition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub entities: Vec<EntityType>,
    #[serde(default)]
    pub schemas: Vec<SchemaEntry>,
    #[serde(default)]
    pub routes: Vec<RouteNode>,
}

impl Catalog {
    /// Load a catalog, choosing the parser from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read,
    /// [`RegistryError::UnsupportedFormat`] for extensions other than
    /// `toml`/`json`, and [`RegistryError::Parse`] for malformed content.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |message: String| RegistryError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let catalog: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&raw).map_err(|e| parse_error(e.to_string()))?,
            Some("json") => serde_json::from_str(&raw).map_err(|e| parse_error(e.to_string()))?,
            other => {
                return Err(RegistryError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };

        tracing::debug!(
            path = %path.display(),
            entities = catalog.entities.len(),
            schemas = catalog.schemas.len(),
            routes = catalog.routes.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Split into the registry, schema lookup and route tree.
    #[must_use]
    pub fn into_parts(self) -> (StaticRegistry, SchemaCatalog, Vec<RouteNode>) {
        let registry = self.entities.into_iter().collect();
        let mut schemas = SchemaCatalog::new();
        for entry in self.schemas {
            schemas.register(entry.path, entry.definition);
        }
        (registry, schemas, self.routes)
    }
}
