use nav_core::bindings::SectionBinding;
use nav_core::schema::ResolvedSchema;
use serde::Serialize;

use crate::cli::root_commands::SectionsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Flat summary of a section binding for table output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SectionRow {
    pub entity: String,
    pub form: String,
    pub table: String,
    pub filter: Option<String>,
    pub subsections: Vec<String>,
    pub is_child: bool,
}

impl From<&SectionBinding> for SectionRow {
    fn from(section: &SectionBinding) -> Self {
        Self {
            entity: section.entity.qualified_name(),
            form: schema_cell(&section.form_schema),
            table: schema_cell(&section.table_schema),
            filter: section.filter_schema.as_ref().map(schema_cell),
            subsections: section
                .subsections
                .iter()
                .map(|sub| format!("{} ({})", sub.entity.type_name, sub.related_field))
                .collect(),
            is_child: section.is_child,
        }
    }
}

/// `Name [strategy]`, e.g. `DecreeForm [convention]`.
pub fn schema_cell(schema: &ResolvedSchema) -> String {
    format!("{} [{}]", schema.name(), schema.source.strategy())
}

/// Handle `navkit sections`.
pub fn handle(args: &SectionsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sections = ctx
        .discovery()
        .sections(args.namespace.as_deref(), args.include_children)?;

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&sections, flags.format),
        OutputFormat::Table => {
            let rows: Vec<SectionRow> = sections.iter().map(SectionRow::from).collect();
            output(&rows, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use nav_core::bindings::SubsectionBinding;
    use nav_core::entities::EntityType;
    use nav_core::enums::SchemaKind;
    use nav_core::schema::{BindingSource, SchemaDefinition};
    use pretty_assertions::assert_eq;

    use super::*;

    fn schema(name: &str, kind: SchemaKind, source: BindingSource) -> ResolvedSchema {
        ResolvedSchema::new(SchemaDefinition::new(name, kind, vec![]), source)
    }

    #[test]
    fn row_summarizes_bindings_and_subsections() {
        let section = SectionBinding {
            entity: EntityType::new("main", "Affiliate"),
            form_schema: schema(
                "AffiliateForm",
                SchemaKind::Form,
                BindingSource::Convention {
                    path: "main.forms.AffiliateForm".into(),
                },
            ),
            table_schema: schema("AffiliateTable", SchemaKind::Table, BindingSource::Generated),
            filter_schema: None,
            subsections: vec![SubsectionBinding {
                entity: EntityType::new("main", "Tag"),
                related_field: "tags".into(),
                form_schema: schema("TagForm", SchemaKind::Form, BindingSource::Generated),
            }],
            is_child: false,
        };

        assert_eq!(
            SectionRow::from(&section),
            SectionRow {
                entity: "main.Affiliate".into(),
                form: "AffiliateForm [convention]".into(),
                table: "AffiliateTable [generated]".into(),
                filter: None,
                subsections: vec!["Tag (tags)".into()],
                is_child: false,
            }
        );
    }
}
