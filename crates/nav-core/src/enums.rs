//! Relation kinds and schema kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RelationKind
// ---------------------------------------------------------------------------

/// Cardinality of a relation between two entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    OneToMany,
    ManyToMany,
    OneToOne,
}

impl RelationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneToMany => "one_to_many",
            Self::ManyToMany => "many_to_many",
            Self::OneToOne => "one_to_one",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SchemaKind
// ---------------------------------------------------------------------------

/// The three UI schema bindings resolved per section entity.
///
/// Each kind has a fixed convention module and name suffix:
///
/// ```text
/// form   → <namespace>.forms.<TypeName>Form
/// table  → <namespace>.tables.<TypeName>Table
/// filter → <namespace>.filters.<TypeName>Filter
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Form,
    Table,
    Filter,
}

impl SchemaKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Table => "table",
            Self::Filter => "filter",
        }
    }

    /// Collection segment used in convention paths.
    #[must_use]
    pub const fn module(self) -> &'static str {
        match self {
            Self::Form => "forms",
            Self::Table => "tables",
            Self::Filter => "filters",
        }
    }

    /// Name suffix appended to the type name in convention paths.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Form => "Form",
            Self::Table => "Table",
            Self::Filter => "Filter",
        }
    }

    /// Build the convention path for an entity: `<namespace>.<module>.<TypeName><Suffix>`.
    #[must_use]
    pub fn convention_path(self, namespace: &str, type_name: &str) -> String {
        format!(
            "{namespace}.{}.{type_name}{}",
            self.module(),
            self.suffix()
        )
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
