use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DefaultSectionArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DefaultSection<'a> {
    namespace: &'a str,
    section: Option<String>,
}

/// Handle `navkit default-section`.
pub fn handle(
    args: &DefaultSectionArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let namespace = args
        .namespace
        .as_deref()
        .unwrap_or(&ctx.config.general.default_namespace);
    let section = ctx.discovery().default_section(namespace)?;

    output(
        &DefaultSection {
            namespace,
            section,
        },
        flags.format,
    )
}
