//! Schema definitions and resolved bindings.
//!
//! A schema is a plain value object: the name it was registered or generated
//! under, the fields it covers, and free-form string attributes. Nothing in
//! navkit interprets `attrs`; they are carried through for the renderer.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SchemaKind;

/// A form, table, or filter schema definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaDefinition {
    pub name: String,
    pub kind: SchemaKind,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
}

impl SchemaDefinition {
    pub fn new(name: impl Into<String>, kind: SchemaKind, fields: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            fields,
            attrs: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// Explicit schema reference exposed by an entity type.
///
/// A `Path` is resolved through the schema lookup provider; a `Direct`
/// definition is used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SchemaHook {
    Path(String),
    Direct(SchemaDefinition),
}

/// Which strategy produced a resolved schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum BindingSource {
    /// Found at the naming-convention path.
    Convention { path: String },
    /// Found through the entity's explicit hook. `path` is absent for direct hooks.
    Hook {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    /// Synthesized from the entity's field list.
    Generated,
}

impl BindingSource {
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated)
    }

    /// Strategy name, as used in the serialized `strategy` tag.
    #[must_use]
    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::Convention { .. } => "convention",
            Self::Hook { .. } => "hook",
            Self::Generated => "generated",
        }
    }
}

/// A schema definition together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedSchema {
    pub definition: SchemaDefinition,
    pub source: BindingSource,
}

impl ResolvedSchema {
    #[must_use]
    pub const fn new(definition: SchemaDefinition, source: BindingSource) -> Self {
        Self { definition, source }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}
