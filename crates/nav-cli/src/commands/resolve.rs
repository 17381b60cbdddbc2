use nav_core::bindings::EntityBindings;
use serde::Serialize;

use crate::cli::root_commands::ResolveArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::sections::schema_cell;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct BindingSummary {
    entity: String,
    form: String,
    table: String,
    filter: Option<String>,
}

impl From<&EntityBindings> for BindingSummary {
    fn from(bindings: &EntityBindings) -> Self {
        Self {
            entity: bindings.entity.qualified_name(),
            form: schema_cell(&bindings.form_schema),
            table: schema_cell(&bindings.table_schema),
            filter: bindings.filter_schema.as_ref().map(schema_cell),
        }
    }
}

/// Handle `navkit resolve <namespace> <type>`.
pub fn handle(args: &ResolveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let bindings = ctx
        .discovery()
        .resolve_entity(&args.namespace, &args.type_name)?;

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&bindings, flags.format),
        OutputFormat::Table => output(&BindingSummary::from(&bindings), flags.format),
    }
}
