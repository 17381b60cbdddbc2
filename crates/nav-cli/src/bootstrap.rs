use anyhow::Context;
use nav_config::NavConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, with `--config` on top of the discovered files.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<NavConfig> {
    match &flags.config {
        Some(path) => {
            let _ = dotenvy::dotenv();
            NavConfig::load_from(path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => NavConfig::load_with_dotenv().context("failed to load navkit configuration"),
    }
}
