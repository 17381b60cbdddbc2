use nav_discovery::{RouteMatch, extract_hint};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MatchArgs;
use crate::context::AppContext;
use crate::output::output;

/// What the matcher made of a route name.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct MatchReport {
    route_name: String,
    keyword: Option<String>,
    hint: Option<String>,
    entity: Option<String>,
    is_child: Option<bool>,
}

/// Handle `navkit match <route-name>`.
pub fn handle(args: &MatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let discovery = ctx.discovery();
    let found = discovery.match_route(&args.route_name)?;

    // Sidebar membership also depends on child classification.
    let is_child = match &found {
        Some(found) => Some(discovery.is_child(&found.entity)?),
        None => None,
    };

    let report = report(&args.route_name, &ctx.sidebar.keyword_tokens, found, is_child);
    output(&report, flags.format)
}

fn report(
    route_name: &str,
    keyword_tokens: &[String],
    found: Option<RouteMatch>,
    is_child: Option<bool>,
) -> MatchReport {
    let hint = extract_hint(route_name, keyword_tokens);
    MatchReport {
        route_name: route_name.to_string(),
        keyword: hint.as_ref().map(|h| h.keyword.clone()),
        hint: hint.map(|h| h.hint),
        entity: found.map(|m| m.entity.qualified_name()),
        is_child,
    }
}

#[cfg(test)]
mod tests {
    use nav_core::entities::EntityType;
    use nav_discovery::RouteHint;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn report_for_a_match() {
        let found = RouteMatch {
            hint: RouteHint {
                keyword: "list".into(),
                hint: "decrees".into(),
            },
            entity: EntityType::new("documents", "Decree"),
        };
        let report = report("decrees_list", &["list".to_string()], Some(found), Some(false));
        assert_eq!(
            report,
            MatchReport {
                route_name: "decrees_list".into(),
                keyword: Some("list".into()),
                hint: Some("decrees".into()),
                entity: Some("documents.Decree".into()),
                is_child: Some(false),
            }
        );
    }

    #[test]
    fn report_without_keyword() {
        let report = report("publications", &["list".to_string()], None, None);
        assert_eq!(report.keyword, None);
        assert_eq!(report.entity, None);
    }
}
