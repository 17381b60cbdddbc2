//! Route inventory scanner.

use nav_core::routes::{RouteDescriptor, RouteNode};

/// Flatten a route tree into its terminal routes, depth-first, in declaration order.
///
/// Each descriptor carries the concatenated prefixes of its enclosing groups.
#[must_use]
pub fn flatten_routes(nodes: &[RouteNode]) -> Vec<RouteDescriptor> {
    let mut out = Vec::new();
    collect(nodes, "", &mut out);
    out
}

fn collect(nodes: &[RouteNode], prefix: &str, out: &mut Vec<RouteDescriptor>) {
    for node in nodes {
        match node {
            RouteNode::Group {
                prefix: group_prefix,
                routes,
            } => collect(routes, &format!("{prefix}{group_prefix}"), out),
            RouteNode::Route { name, .. } => out.push(RouteDescriptor {
                name: name.clone(),
                path_prefix: prefix.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn descriptor(name: &str, path_prefix: &str) -> RouteDescriptor {
        RouteDescriptor {
            name: name.into(),
            path_prefix: path_prefix.into(),
        }
    }

    #[test]
    fn empty_tree_yields_nothing() {
        assert!(flatten_routes(&[]).is_empty());
        assert!(flatten_routes(&[RouteNode::group("api/", vec![])]).is_empty());
    }

    #[test]
    fn nested_groups_flatten_depth_first_with_prefixes() {
        let tree = vec![
            RouteNode::route("index"),
            RouteNode::group(
                "documents/",
                vec![
                    RouteNode::route("decree_list"),
                    RouteNode::group("archive/", vec![RouteNode::route("old_decree_list")]),
                    RouteNode::route("publication_list"),
                ],
            ),
            RouteNode::route("login"),
        ];

        assert_eq!(
            flatten_routes(&tree),
            vec![
                descriptor("index", ""),
                descriptor("decree_list", "documents/"),
                descriptor("old_decree_list", "documents/archive/"),
                descriptor("publication_list", "documents/"),
                descriptor("login", ""),
            ]
        );
    }

    #[test]
    fn duplicate_names_are_kept() {
        let tree = vec![RouteNode::route("tag_list"), RouteNode::route("tag_list")];
        assert_eq!(flatten_routes(&tree).len(), 2);
    }
}
