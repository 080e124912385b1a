//! Navigation tree and permission-based filtering.
//!
//! The navigation tree is compiled-in data, like the catalog and the role
//! tables. Filtering prunes it to what the acting user may see; a group whose
//! children are all pruned is dropped entirely, because an empty clickable
//! group header reveals module names to users with no access to any of their
//! contents.

use std::borrow::Cow;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{Action, EffectivePermissions, Resource, check};

/// A single navigation entry: a leaf (has an `href`) or a group (has
/// children).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: Cow<'static, str>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Cow<'static, str>>,

    /// Resource whose `view` grant gates this item, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,

    /// Kept regardless of permissions (e.g. the dashboard landing page).
    #[serde(default)]
    pub always_visible: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// A permission-gated leaf.
    pub fn leaf(
        label: impl Into<Cow<'static, str>>,
        href: impl Into<Cow<'static, str>>,
        resource: &'static str,
    ) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            resource: Some(Resource::new(resource)),
            always_visible: false,
            children: Vec::new(),
        }
    }

    /// An ungated leaf (no declared required permission).
    pub fn open_leaf(label: impl Into<Cow<'static, str>>, href: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            resource: None,
            always_visible: false,
            children: Vec::new(),
        }
    }

    /// A group of child items.
    pub fn group(label: impl Into<Cow<'static, str>>, children: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            href: None,
            resource: None,
            always_visible: false,
            children,
        }
    }

    /// Mark this item as visible regardless of permissions.
    pub fn always_visible(mut self) -> Self {
        self.always_visible = true;
        self
    }

    fn filtered(&self, effective: &EffectivePermissions) -> Option<NavItem> {
        if self.children.is_empty() {
            let keep = self.always_visible
                || match &self.resource {
                    None => true,
                    Some(resource) => {
                        check::has_permission(effective, resource.as_str(), Action::View, None)
                    }
                };
            return keep.then(|| self.clone());
        }

        let children: Vec<NavItem> = self
            .children
            .iter()
            .filter_map(|child| child.filtered(effective))
            .collect();

        if children.is_empty() && !self.always_visible {
            return None;
        }

        Some(NavItem {
            children,
            ..self.clone()
        })
    }
}

/// The full navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTree {
    pub items: Vec<NavItem>,
}

impl NavTree {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    /// Prune the tree to the items the effective set may see.
    pub fn filter(&self, effective: &EffectivePermissions) -> NavTree {
        NavTree {
            items: self
                .items
                .iter()
                .filter_map(|item| item.filtered(effective))
                .collect(),
        }
    }

    /// All items whose `href` equals `path` exactly (depth-first).
    ///
    /// Exact match only: nested or dynamic route segments are not
    /// pattern-matched, and deeper routes under a gated section do not
    /// inherit the section's requirement.
    pub fn find_by_href(&self, path: &str) -> Vec<&NavItem> {
        let mut out = Vec::new();
        collect_by_href(&self.items, path, &mut out);
        out
    }
}

fn collect_by_href<'a>(items: &'a [NavItem], path: &str, out: &mut Vec<&'a NavItem>) {
    for item in items {
        if item.href.as_deref() == Some(path) {
            out.push(item);
        }
        collect_by_href(&item.children, path, out);
    }
}

/// The application's navigation tree.
pub fn default_navigation() -> &'static NavTree {
    static TREE: OnceLock<NavTree> = OnceLock::new();
    TREE.get_or_init(build_default_navigation)
}

fn build_default_navigation() -> NavTree {
    NavTree::new(vec![
        NavItem::open_leaf("Dashboard", "/dashboard").always_visible(),
        NavItem::group(
            "Compliance",
            vec![
                NavItem::leaf("Frameworks", "/compliance/frameworks", "compliance.frameworks"),
                NavItem::leaf("Controls", "/compliance/controls", "compliance.controls"),
                NavItem::leaf("Governance", "/compliance/governance", "compliance.governance"),
                NavItem::leaf("Evidence", "/compliance/evidence", "compliance.evidence"),
            ],
        ),
        NavItem::group(
            "Risk",
            vec![
                NavItem::leaf("Risk Register", "/risk/register", "risk.register"),
                NavItem::leaf("Assessments", "/risk/assessments", "risk.assessments"),
                NavItem::leaf("KPIs", "/risk/kpis", "risk.kpis"),
            ],
        ),
        NavItem::group(
            "Policies",
            vec![
                NavItem::leaf("Policy Library", "/policies", "policy.library"),
                NavItem::leaf("Exceptions", "/policies/exceptions", "policy.exceptions"),
            ],
        ),
        NavItem::group(
            "Audit",
            vec![
                NavItem::leaf("Engagements", "/audit/engagements", "audit.engagements"),
                NavItem::leaf("Findings", "/audit/findings", "audit.findings"),
                NavItem::leaf("Workpapers", "/audit/workpapers", "audit.workpapers"),
                NavItem::leaf("Audit Settings", "/audit/settings", "audit.settings"),
            ],
        ),
        NavItem::leaf("Assets", "/assets", "assets.inventory"),
        NavItem::leaf("Reports", "/reports", "reports.dashboards"),
        NavItem::group(
            "Administration",
            vec![
                NavItem::leaf("Users", "/admin/users", "admin.users"),
                NavItem::leaf("Departments", "/admin/departments", "admin.departments"),
                NavItem::leaf("Settings", "/admin/settings", "admin.settings"),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::roles::{AUDIT_USER, REVIEWER};
    use crate::{Role, expand};

    fn expand_names(names: &[&str]) -> EffectivePermissions {
        let roles: Vec<Role> = names.iter().map(|n| Role::new(n.to_string())).collect();
        expand(&roles)
    }

    fn assert_no_empty_gated_groups(items: &[NavItem]) {
        for item in items {
            if item.href.is_none() && !item.always_visible {
                assert!(
                    !item.children.is_empty(),
                    "group '{}' survived filtering with no children",
                    item.label
                );
            }
            assert_no_empty_gated_groups(&item.children);
        }
    }

    #[test]
    fn default_tree_resources_are_all_in_the_catalog() {
        fn walk(items: &[NavItem]) {
            for item in items {
                if let Some(resource) = &item.resource {
                    assert!(
                        catalog::actions_for(resource.as_str()).is_some(),
                        "nav item '{}' references unknown resource {}",
                        item.label,
                        resource
                    );
                }
                walk(&item.children);
            }
        }
        walk(&default_navigation().items);
    }

    #[test]
    fn filter_drops_groups_with_no_visible_children() {
        let filtered = default_navigation().filter(&expand_names(&[AUDIT_USER]));

        assert_no_empty_gated_groups(&filtered.items);

        // AuditUser holds nothing in the Administration module; the group
        // header itself must not leak.
        assert!(!filtered.items.iter().any(|i| i.label == "Administration"));

        // The audit module survives, minus the settings leaf.
        let audit = filtered.items.iter().find(|i| i.label == "Audit").unwrap();
        assert!(audit.children.iter().any(|i| i.label == "Engagements"));
        assert!(!audit.children.iter().any(|i| i.label == "Audit Settings"));
    }

    #[test]
    fn filter_keeps_gated_leaves_the_user_can_view() {
        let filtered = default_navigation().filter(&expand_names(&[REVIEWER]));

        let compliance = filtered.items.iter().find(|i| i.label == "Compliance").unwrap();
        assert!(compliance.children.iter().any(|i| i.label == "Governance"));

        // Reviewer has no audit grants at all.
        assert!(!filtered.items.iter().any(|i| i.label == "Audit"));
    }

    #[test]
    fn empty_set_sees_only_always_visible_items() {
        let filtered = default_navigation().filter(&EffectivePermissions::default());

        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.items[0].label, "Dashboard");
    }

    #[test]
    fn always_visible_group_survives_with_zero_children() {
        let tree = NavTree::new(vec![
            NavItem::group(
                "Help",
                vec![NavItem::leaf("Internals", "/help/internals", "admin.settings")],
            )
            .always_visible(),
        ]);

        let filtered = tree.filter(&EffectivePermissions::default());
        assert_eq!(filtered.items.len(), 1);
        assert!(filtered.items[0].children.is_empty());
    }

    #[test]
    fn find_by_href_is_exact() {
        let tree = default_navigation();
        assert_eq!(tree.find_by_href("/compliance/controls").len(), 1);
        assert!(tree.find_by_href("/compliance").is_empty());
        assert!(tree.find_by_href("/compliance/controls/42").is_empty());
    }
}
