//! Produced navigation surface: sidebar items, static extra groups, overrides.
//!
//! Everything here is recomputed on every discovery pass and never persisted.

use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Order assigned to items whose entity declares none.
pub const DEFAULT_ORDER: i32 = 100;

/// A discovered navigation entry for a section entity reached through a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SidebarItem {
    pub route_name: String,
    pub label: String,
    pub icon: String,
    pub order: i32,
    pub namespace: String,
    pub type_name: String,
    pub required_permissions: Vec<String>,
}

impl SidebarItem {
    /// Display order: `order` ascending, then `label` ascending.
    #[must_use]
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.label.cmp(&other.label))
    }

    /// Apply whichever override fields are present.
    pub fn apply_override(&mut self, item_override: &ItemOverride) {
        if let Some(label) = &item_override.label {
            self.label.clone_from(label);
        }
        if let Some(icon) = &item_override.icon {
            self.icon.clone_from(icon);
        }
        if let Some(order) = item_override.order {
            self.order = order;
        }
    }
}

/// Per-route override of a discovered item. Each field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ItemOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// A static link inside an extra group. Bypasses entity matching entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SidebarLink {
    pub route_name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

/// A named group of static links, emitted verbatim after discovered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SidebarGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Vec<SidebarLink>,
}

/// Result of a sidebar discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Sidebar {
    /// Discovered items, sorted by `(order, label)`.
    pub items: Vec<SidebarItem>,
    /// Static groups in configured order.
    pub extra_groups: Vec<SidebarGroup>,
}

impl Sidebar {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.extra_groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(label: &str, order: i32) -> SidebarItem {
        SidebarItem {
            route_name: format!("{}_list", label.to_lowercase()),
            label: label.into(),
            icon: "bi-list".into(),
            order,
            namespace: "main".into(),
            type_name: label.into(),
            required_permissions: vec![],
        }
    }

    #[test]
    fn display_order_breaks_ties_by_label() {
        let mut items = vec![item("Tags", 100), item("Decrees", 100), item("Zones", 5)];
        items.sort_by(SidebarItem::display_cmp);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Zones", "Decrees", "Tags"]);
    }

    #[test]
    fn partial_override_leaves_other_fields() {
        let mut decrees = item("Decrees", 100);
        decrees.apply_override(&ItemOverride {
            order: Some(1),
            ..Default::default()
        });
        assert_eq!(decrees.order, 1);
        assert_eq!(decrees.label, "Decrees");
        assert_eq!(decrees.icon, "bi-list");
    }
}
