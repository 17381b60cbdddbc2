use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `navkit` binary.
#[derive(Debug, Parser)]
#[command(
    name = "navkit",
    version,
    about = "navkit - route-driven sidebar and section discovery"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog file (defaults to `general.catalog_path`)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Extra config file layered above the discovered ones
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            catalog: self.catalog.clone(),
            config: self.config.clone(),
        }
    }
}
