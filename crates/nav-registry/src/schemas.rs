//! Schema lookup provider.
//!
//! Maps fully-qualified paths (`documents.forms.DecreeForm`) to authored
//! schema definitions. Used identically for forms, tables and filters.

use std::collections::HashMap;

use nav_core::enums::SchemaKind;
use nav_core::schema::SchemaDefinition;

use crate::error::LookupError;

/// Resolve a schema path to its definition.
pub trait SchemaLookup {
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when nothing is registered at `path`.
    fn lookup(&self, path: &str) -> Result<SchemaDefinition, LookupError>;

    /// Like [`SchemaLookup::lookup`], but rejects definitions of another kind.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::KindMismatch`] when the path holds a different kind.
    fn lookup_kind(&self, path: &str, kind: SchemaKind) -> Result<SchemaDefinition, LookupError> {
        let definition = self.lookup(path)?;
        if definition.kind == kind {
            Ok(definition)
        } else {
            Err(LookupError::KindMismatch {
                path: path.to_string(),
                expected: kind,
                found: definition.kind,
            })
        }
    }
}

/// In-memory schema store keyed by path.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schemas: HashMap<String, SchemaDefinition>,
}

impl SchemaCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under `path`, replacing any previous one.
    pub fn register(&mut self, path: impl Into<String>, definition: SchemaDefinition) {
        self.schemas.insert(path.into(), definition);
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<String>, definition: SchemaDefinition) -> Self {
        self.register(path, definition);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaLookup for SchemaCatalog {
    fn lookup(&self, path: &str) -> Result<SchemaDefinition, LookupError> {
        if path.split('.').any(str::is_empty) {
            return Err(LookupError::Invalid(path.to_string()));
        }
        self.schemas
            .get(path)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SchemaCatalog {
        SchemaCatalog::new()
            .with(
                "documents.forms.DecreeForm",
                SchemaDefinition::new("DecreeForm", SchemaKind::Form, vec!["number".into()]),
            )
            .with(
                "documents.tables.DecreeTable",
                SchemaDefinition::new("DecreeTable", SchemaKind::Table, vec![]),
            )
    }

    #[test]
    fn lookup_finds_registered_path() {
        let found = catalog().lookup("documents.forms.DecreeForm").unwrap();
        assert_eq!(found.name, "DecreeForm");
    }

    #[test]
    fn lookup_reports_missing_and_invalid_paths() {
        let cat = catalog();
        assert!(matches!(
            cat.lookup("documents.forms.TagForm"),
            Err(LookupError::NotFound(_))
        ));
        assert!(matches!(cat.lookup(""), Err(LookupError::Invalid(_))));
        assert!(matches!(
            cat.lookup("documents..DecreeForm"),
            Err(LookupError::Invalid(_))
        ));
    }

    #[test]
    fn lookup_kind_rejects_other_kinds() {
        let err = catalog()
            .lookup_kind("documents.tables.DecreeTable", SchemaKind::Form)
            .unwrap_err();
        assert!(matches!(
            err,
            LookupError::KindMismatch {
                expected: SchemaKind::Form,
                found: SchemaKind::Table,
                ..
            }
        ));
    }
}
