use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Assemble the sidebar from the catalog's routes.
    Sidebar,
    /// List section entities with their form/table/filter bindings.
    Sections(SectionsArgs),
    /// Resolve the bindings of a single entity type.
    Resolve(ResolveArgs),
    /// Print the first standalone section of a namespace.
    DefaultSection(DefaultSectionArgs),
    /// Show how a route name is matched to an entity type.
    Match(MatchArgs),
    /// List the flattened route inventory.
    Routes,
}

#[derive(Clone, Debug, Args)]
pub struct SectionsArgs {
    /// Only this namespace (also serves namespaces excluded by config)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Include child entities that are otherwise only subsections
    #[arg(long)]
    pub include_children: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// Entity namespace
    pub namespace: String,

    /// Entity type name (case-insensitive)
    pub type_name: String,
}

#[derive(Clone, Debug, Args)]
pub struct DefaultSectionArgs {
    /// Namespace to inspect (defaults to `general.default_namespace`)
    #[arg(long)]
    pub namespace: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MatchArgs {
    /// Route name, e.g. `decree_list`
    pub route_name: String,
}
