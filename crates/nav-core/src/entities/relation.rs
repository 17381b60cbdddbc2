use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RelationKind;
use crate::errors::CoreError;

/// Reference to an entity type by namespace and type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct EntityRef {
    pub namespace: String,
    pub type_name: String,
}

impl EntityRef {
    pub fn new(namespace: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
        }
    }

    /// Parse a qualified `namespace.TypeName` reference.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when either half is missing.
    pub fn parse(qualified: &str) -> Result<Self, CoreError> {
        match qualified.rsplit_once('.') {
            Some((namespace, type_name)) if !namespace.is_empty() && !type_name.is_empty() => {
                Ok(Self::new(namespace, type_name))
            }
            _ => Err(CoreError::Validation(format!(
                "expected 'namespace.TypeName', got '{qualified}'"
            ))),
        }
    }

    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.namespace, self.type_name)
    }

    /// Case-insensitive on the type name, exact on the namespace.
    #[must_use]
    pub fn refers_to(&self, namespace: &str, type_name: &str) -> bool {
        self.namespace == namespace && self.type_name.eq_ignore_ascii_case(type_name)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.type_name)
    }
}

/// A relation declared on (or implied for) an entity type.
///
/// `is_reverse` marks descriptors the registry derives on the *target* side
/// of a relation declared elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelationDescriptor {
    pub kind: RelationKind,
    pub target: EntityRef,
    #[serde(default)]
    pub is_reverse: bool,
    pub accessor_name: String,
}

impl RelationDescriptor {
    /// A forward many-to-many relation declared on the owning entity.
    pub fn many_to_many(target: EntityRef, accessor_name: impl Into<String>) -> Self {
        Self {
            kind: RelationKind::ManyToMany,
            target,
            is_reverse: false,
            accessor_name: accessor_name.into(),
        }
    }

    #[must_use]
    pub fn is_forward_many_to_many(&self) -> bool {
        self.kind == RelationKind::ManyToMany && !self.is_reverse
    }

    #[must_use]
    pub fn is_reverse_many_to_many(&self) -> bool {
        self.kind == RelationKind::ManyToMany && self.is_reverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_last_dot() {
        let r = EntityRef::parse("documents.Decree").unwrap();
        assert_eq!(r, EntityRef::new("documents", "Decree"));
        assert_eq!(r.qualified(), "documents.Decree");
    }

    #[test]
    fn parse_rejects_unqualified_names() {
        assert!(matches!(
            EntityRef::parse("Decree"),
            Err(CoreError::Validation(_))
        ));
        assert!(EntityRef::parse(".Decree").is_err());
        assert!(EntityRef::parse("documents.").is_err());
    }

    #[test]
    fn refers_to_ignores_type_name_case() {
        let r = EntityRef::new("main", "Tag");
        assert!(r.refers_to("main", "tag"));
        assert!(!r.refers_to("Main", "Tag"));
    }
}
