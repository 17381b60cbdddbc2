use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `navkit routes`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.discovery().routes(&ctx.routes), flags.format)
}
