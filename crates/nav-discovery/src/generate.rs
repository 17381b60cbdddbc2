//! Generated default schemas, built from an entity's field list.

use nav_core::entities::EntityType;
use nav_core::enums::SchemaKind;
use nav_core::schema::SchemaDefinition;

/// Listing over every field, with filtering switched off.
#[must_use]
pub fn table(entity: &EntityType) -> SchemaDefinition {
    let fields = entity.fields.iter().map(|f| f.name.clone()).collect();
    SchemaDefinition::new(
        format!("{}{}", entity.type_name, SchemaKind::Table.suffix()),
        SchemaKind::Table,
        fields,
    )
    .with_attr("filterable", "false")
}

/// Edit form over every editable, non-implicit field.
#[must_use]
pub fn form(entity: &EntityType) -> SchemaDefinition {
    let fields = entity
        .fields
        .iter()
        .filter(|f| f.is_form_field())
        .map(|f| f.name.clone())
        .collect();
    SchemaDefinition::new(
        format!("{}{}", entity.type_name, SchemaKind::Form.suffix()),
        SchemaKind::Form,
        fields,
    )
}

/// Generated default for a kind. Filters have none.
#[must_use]
pub fn default_for(entity: &EntityType, kind: SchemaKind) -> Option<SchemaDefinition> {
    match kind {
        SchemaKind::Form => Some(form(entity)),
        SchemaKind::Table => Some(table(entity)),
        SchemaKind::Filter => None,
    }
}
