use std::path::Path;

use anyhow::Context;
use nav_config::{MatchConfig, NavConfig};
use nav_core::routes::RouteNode;
use nav_discovery::Discovery;
use nav_registry::{Catalog, SchemaCatalog, StaticRegistry};

use crate::cli::GlobalFlags;

/// Everything a command needs: config, the loaded catalog and its routes.
pub struct AppContext {
    pub config: NavConfig,
    /// Sidebar config with the persisted toggle applied.
    pub sidebar: MatchConfig,
    pub registry: StaticRegistry,
    pub schemas: SchemaCatalog,
    pub routes: Vec<RouteNode>,
}

impl AppContext {
    pub fn init(config: NavConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let catalog_path = flags
            .catalog
            .as_deref()
            .unwrap_or(config.general.catalog_path.as_path());
        let (registry, schemas, routes) = load_catalog(catalog_path)?;
        let sidebar = config.effective_sidebar();

        tracing::debug!(
            catalog = %catalog_path.display(),
            entities = registry.len(),
            schemas = schemas.len(),
            enabled = sidebar.enabled,
            "context ready"
        );

        Ok(Self {
            config,
            sidebar,
            registry,
            schemas,
            routes,
        })
    }

    pub fn discovery(&self) -> Discovery<'_> {
        Discovery::new(&self.registry, &self.schemas, &self.sidebar)
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<(StaticRegistry, SchemaCatalog, Vec<RouteNode>)> {
    let catalog = Catalog::from_path(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    Ok(catalog.into_parts())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(catalog: PathBuf) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            catalog: Some(catalog),
            config: None,
        }
    }

    #[test]
    fn catalog_flag_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r#"
[[entities]]
namespace = "documents"
type_name = "Decree"
is_section = true

[[routes]]
name = "decree_list"
"#,
        )
        .unwrap();

        let ctx = AppContext::init(NavConfig::default(), &flags(path)).unwrap();
        assert_eq!(ctx.registry.len(), 1);
        assert_eq!(ctx.routes.len(), 1);
        let sidebar = ctx.discovery().sidebar(&ctx.routes).unwrap();
        assert_eq!(sidebar.items[0].label, "Decrees");
    }

    #[test]
    fn demo_catalog_assembles() {
        let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/catalog.toml");
        let ctx = AppContext::init(NavConfig::default(), &flags(demo)).unwrap();

        let sidebar = ctx.discovery().sidebar(&ctx.routes).unwrap();
        let labels: Vec<&str> = sidebar.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Decrees", "Affiliates", "Monthly reports", "Publications"]);

        let sections = ctx.discovery().sections(Some("main"), false).unwrap();
        assert_eq!(sections[0].subsections[0].related_field, "tags");
    }

    #[test]
    fn missing_catalog_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let Err(error) = AppContext::init(NavConfig::default(), &flags(path)) else {
            panic!("missing catalog should fail");
        };
        assert!(format!("{error:#}").contains("absent.toml"));
    }
}
