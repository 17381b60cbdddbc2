use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Sidebar => commands::sidebar::handle(ctx, flags),
        Commands::Sections(args) => commands::sections::handle(args, ctx, flags),
        Commands::Resolve(args) => commands::resolve::handle(args, ctx, flags),
        Commands::DefaultSection(args) => commands::default_section::handle(args, ctx, flags),
        Commands::Match(args) => commands::match_route::handle(args, ctx, flags),
        Commands::Routes => commands::routes::handle(ctx, flags),
    }
}
