//! Section and subsection bindings handed to the editing-screen composer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EntityType;
use crate::schema::ResolvedSchema;

/// Resolved (form, table, filter) triple for a section entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionBinding {
    pub entity: EntityType,
    pub form_schema: ResolvedSchema,
    pub table_schema: ResolvedSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_schema: Option<ResolvedSchema>,
    /// Many-to-many children editable only through this entity's UI,
    /// in relation declaration order.
    #[serde(default)]
    pub subsections: Vec<SubsectionBinding>,
    pub is_child: bool,
}

/// A many-to-many-linked child entity embedded in its parent's editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubsectionBinding {
    pub entity: EntityType,
    /// Accessor of the many-to-many relation on the parent.
    pub related_field: String,
    pub form_schema: ResolvedSchema,
}

/// Bindings for a single, explicitly named entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntityBindings {
    pub entity: EntityType,
    pub form_schema: ResolvedSchema,
    pub table_schema: ResolvedSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_schema: Option<ResolvedSchema>,
}
