use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{FieldDescriptor, RelationDescriptor};
use crate::enums::SchemaKind;
use crate::schema::SchemaHook;

const fn default_managed() -> bool {
    true
}

/// An entity type as exposed by the entity registry.
///
/// Display names and the permission key may be left empty in catalogs;
/// [`EntityType::normalized`] fills them from the type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntityType {
    pub namespace: String,
    pub type_name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub declared_relations: Vec<RelationDescriptor>,
    /// Explicit opt-in to section discovery.
    #[serde(default)]
    pub is_section: bool,
    /// Unmanaged (non-persisted) types are never discovered as sections.
    #[serde(default = "default_managed")]
    pub managed: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub display_name_plural: String,
    /// Sidebar label that takes precedence over the plural display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_order: Option<i32>,
    #[serde(default)]
    pub permission_key: String,
    /// Legacy explicit schema references, one per kind.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub schema_hooks: BTreeMap<SchemaKind, SchemaHook>,
}

impl EntityType {
    /// A managed, non-section entity type with default display names.
    pub fn new(namespace: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
            fields: Vec::new(),
            declared_relations: Vec::new(),
            is_section: false,
            managed: true,
            is_abstract: false,
            display_name: String::new(),
            display_name_plural: String::new(),
            sidebar_label: None,
            sidebar_icon: None,
            sidebar_order: None,
            permission_key: String::new(),
            schema_hooks: BTreeMap::new(),
        }
        .normalized()
    }

    /// Fill empty display names and permission key from the type name.
    ///
    /// ```text
    /// display_name        = TypeName
    /// display_name_plural = display_name + "s"
    /// permission_key      = typename
    /// ```
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.display_name.is_empty() {
            self.display_name.clone_from(&self.type_name);
        }
        if self.display_name_plural.is_empty() {
            self.display_name_plural = format!("{}s", self.display_name);
        }
        if self.permission_key.is_empty() {
            self.permission_key = self.type_name.to_lowercase();
        }
        self
    }

    /// `namespace.TypeName`, the key used by `excluded_types`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.type_name)
    }

    /// Permission required to view the entity's listing.
    #[must_use]
    pub fn view_permission(&self) -> String {
        format!("{}.view_{}", self.namespace, self.permission_key)
    }

    /// Label shown in navigation: explicit sidebar label, else the plural name.
    #[must_use]
    pub fn sidebar_label(&self) -> &str {
        self.sidebar_label
            .as_deref()
            .unwrap_or(&self.display_name_plural)
    }

    /// Eligible for section discovery: opted in, concrete and managed.
    #[must_use]
    pub const fn is_discoverable_section(&self) -> bool {
        self.is_section && self.managed && !self.is_abstract
    }

    pub fn forward_many_to_many(&self) -> impl Iterator<Item = &RelationDescriptor> {
        self.declared_relations
            .iter()
            .filter(|relation| relation.is_forward_many_to_many())
    }

    #[must_use]
    pub fn hook(&self, kind: SchemaKind) -> Option<&SchemaHook> {
        self.schema_hooks.get(&kind)
    }

    // -- builder helpers, mostly for fixtures --

    #[must_use]
    pub fn section(mut self) -> Self {
        self.is_section = true;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_relation(mut self, relation: RelationDescriptor) -> Self {
        self.declared_relations.push(relation);
        self
    }

    #[must_use]
    pub fn with_hook(mut self, kind: SchemaKind, hook: SchemaHook) -> Self {
        self.schema_hooks.insert(kind, hook);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.sidebar_order = Some(order);
        self
    }
}
