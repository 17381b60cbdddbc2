use nav_core::navigation::Sidebar;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// One static link per row, tagged with its group.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct GroupLinkRow {
    group: String,
    route_name: String,
    label: String,
    permissions: Vec<String>,
}

/// Handle `navkit sidebar`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sidebar = ctx.discovery().sidebar(&ctx.routes)?;

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&sidebar, flags.format),
        OutputFormat::Table => {
            output(&sidebar.items, flags.format)?;
            let links = group_rows(&sidebar);
            if !links.is_empty() {
                println!();
                output(&links, flags.format)?;
            }
            Ok(())
        }
    }
}

fn group_rows(sidebar: &Sidebar) -> Vec<GroupLinkRow> {
    sidebar
        .extra_groups
        .iter()
        .flat_map(|group| {
            group.items.iter().map(|link| GroupLinkRow {
                group: group.name.clone(),
                route_name: link.route_name.clone(),
                label: link.label.clone(),
                permissions: link.permissions.clone(),
            })
        })
        .collect()
}
