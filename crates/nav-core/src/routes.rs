//! Route tree nodes and flattened route descriptors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A node in a hierarchical route tree.
///
/// Serialized untagged: a table with `routes` is a group, anything else with
/// a `name` is a terminal route.
///
/// ```toml
/// [[routes]]
/// prefix = "documents/"
/// routes = [{ name = "decree_list", path = "decrees/" }]
///
/// [[routes]]
/// name = "index"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RouteNode {
    /// A sub-tree mounted under a path prefix.
    Group {
        #[serde(default)]
        prefix: String,
        routes: Vec<RouteNode>,
    },
    /// A terminal, named route. Unnamed routes carry an empty name.
    Route {
        #[serde(default)]
        name: String,
        #[serde(default)]
        path: String,
    },
}

impl RouteNode {
    pub fn route(name: impl Into<String>) -> Self {
        Self::Route {
            name: name.into(),
            path: String::new(),
        }
    }

    pub fn group(prefix: impl Into<String>, routes: Vec<Self>) -> Self {
        Self::Group {
            prefix: prefix.into(),
            routes,
        }
    }
}

/// A terminal route after flattening.
///
/// `path_prefix` is the concatenation of every enclosing group prefix.
/// Names need not be unique across the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RouteDescriptor {
    pub name: String,
    pub path_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_nodes_deserialize_by_shape() {
        let json = r#"[
            {"prefix": "docs/", "routes": [{"name": "decree_list"}]},
            {"name": "index", "path": ""}
        ]"#;
        let nodes: Vec<RouteNode> = serde_json::from_str(json).unwrap();
        assert_eq!(
            nodes,
            vec![
                RouteNode::group("docs/", vec![RouteNode::route("decree_list")]),
                RouteNode::route("index"),
            ]
        );
    }
}
