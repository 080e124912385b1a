//! Permission catalog: every (resource, action) combination the system
//! understands.
//!
//! The catalog is closed, compiled-in data. It is a validation/documentation
//! aid for the other components: a check against a pair not listed here is a
//! configuration gap, logged and denied, never an error. Changing what the
//! system protects is a data change here, not a logic change.

use crate::Action;
use crate::action::Action::{Approve, Create, Delete, Edit, View};

/// One catalog row: a resource and the actions valid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub resource: &'static str,
    pub actions: &'static [Action],
}

const VIEW_ONLY: &[Action] = &[View];
const VIEW_EDIT: &[Action] = &[View, Edit];
const CRUD: &[Action] = &[View, Create, Edit, Delete];
const CRUD_APPROVE: &[Action] = &[View, Create, Edit, Delete, Approve];

/// All protected feature areas, keyed by resource.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { resource: "compliance.frameworks", actions: CRUD },
    CatalogEntry { resource: "compliance.controls", actions: CRUD_APPROVE },
    CatalogEntry { resource: "compliance.governance", actions: &[View, Create, Edit] },
    CatalogEntry { resource: "compliance.evidence", actions: CRUD },
    CatalogEntry { resource: "risk.register", actions: CRUD_APPROVE },
    CatalogEntry { resource: "risk.assessments", actions: &[View, Create, Edit] },
    CatalogEntry { resource: "risk.kpis", actions: CRUD },
    CatalogEntry { resource: "policy.library", actions: CRUD_APPROVE },
    CatalogEntry { resource: "policy.exceptions", actions: &[View, Create, Edit, Approve] },
    CatalogEntry { resource: "audit.engagements", actions: CRUD },
    CatalogEntry { resource: "audit.findings", actions: &[View, Create, Edit, Approve] },
    CatalogEntry { resource: "audit.workpapers", actions: &[View, Create, Edit] },
    CatalogEntry { resource: "audit.settings", actions: VIEW_EDIT },
    CatalogEntry { resource: "assets.inventory", actions: CRUD },
    CatalogEntry { resource: "admin.users", actions: CRUD },
    CatalogEntry { resource: "admin.departments", actions: CRUD },
    CatalogEntry { resource: "admin.settings", actions: VIEW_EDIT },
    CatalogEntry { resource: "reports.dashboards", actions: VIEW_ONLY },
];

/// Valid actions for a resource, or `None` for a resource the catalog does
/// not know.
pub fn actions_for(resource: &str) -> Option<&'static [Action]> {
    CATALOG
        .iter()
        .find(|entry| entry.resource == resource)
        .map(|entry| entry.actions)
}

/// Whether the catalog declares this (resource, action) combination.
pub fn is_defined(resource: &str, action: Action) -> bool {
    actions_for(resource).is_some_and(|actions| actions.contains(&action))
}

/// Iterate over all catalog rows (used by the audit endpoints).
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter()
}
