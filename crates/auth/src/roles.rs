//! Compiled-in role definitions.
//!
//! Each of the eleven roles is a declarative grant table: an unordered set of
//! (resource, action, scope) triples. Adding a role or changing a grant is a
//! data change here, not a logic change. Role definitions are process-wide
//! static data, never mutated at request time.
//!
//! The department-scoped variants (`DepartmentReviewer`,
//! `DepartmentContributor`) are independent tables, not derived from their
//! global counterparts; the test suite holds the two families to the same
//! grant shape so they cannot silently drift apart.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Action;
use crate::Scope;
use crate::action::Action::{Approve, Create, Delete, Edit, View};
use crate::scope::Scope::{Department, Global};

/// Role identifier used for RBAC.
///
/// Roles are intentionally opaque strings at this layer; the compiled-in
/// tables below map them to grants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Role Names
// ─────────────────────────────────────────────────────────────────────────────

pub const GRC_ADMINISTRATOR: &str = "GRCAdministrator";
pub const CUSTOMER_ADMINISTRATOR: &str = "CustomerAdministrator";
pub const REVIEWER: &str = "Reviewer";
pub const CONTRIBUTOR: &str = "Contributor";
pub const AUDITOR: &str = "Auditor";
pub const AUDITEE: &str = "Auditee";
pub const AUDIT_HEAD: &str = "AuditHead";
pub const AUDIT_MANAGER: &str = "AuditManager";
pub const AUDIT_USER: &str = "AuditUser";
pub const DEPARTMENT_REVIEWER: &str = "DepartmentReviewer";
pub const DEPARTMENT_CONTRIBUTOR: &str = "DepartmentContributor";

/// All defined role names.
pub const ROLE_NAMES: &[&str] = &[
    GRC_ADMINISTRATOR,
    CUSTOMER_ADMINISTRATOR,
    REVIEWER,
    CONTRIBUTOR,
    AUDITOR,
    AUDITEE,
    AUDIT_HEAD,
    AUDIT_MANAGER,
    AUDIT_USER,
    DEPARTMENT_REVIEWER,
    DEPARTMENT_CONTRIBUTOR,
];

// ─────────────────────────────────────────────────────────────────────────────
// Grant Tables
// ─────────────────────────────────────────────────────────────────────────────

/// One declared grant: (resource, action, scope).
pub type RoleGrant = (&'static str, Action, Scope);

/// System administrator: every catalog pair, globally.
const GRC_ADMINISTRATOR_GRANTS: &[RoleGrant] = &[
    ("compliance.frameworks", View, Global),
    ("compliance.frameworks", Create, Global),
    ("compliance.frameworks", Edit, Global),
    ("compliance.frameworks", Delete, Global),
    ("compliance.controls", View, Global),
    ("compliance.controls", Create, Global),
    ("compliance.controls", Edit, Global),
    ("compliance.controls", Delete, Global),
    ("compliance.controls", Approve, Global),
    ("compliance.governance", View, Global),
    ("compliance.governance", Create, Global),
    ("compliance.governance", Edit, Global),
    ("compliance.evidence", View, Global),
    ("compliance.evidence", Create, Global),
    ("compliance.evidence", Edit, Global),
    ("compliance.evidence", Delete, Global),
    ("risk.register", View, Global),
    ("risk.register", Create, Global),
    ("risk.register", Edit, Global),
    ("risk.register", Delete, Global),
    ("risk.register", Approve, Global),
    ("risk.assessments", View, Global),
    ("risk.assessments", Create, Global),
    ("risk.assessments", Edit, Global),
    ("risk.kpis", View, Global),
    ("risk.kpis", Create, Global),
    ("risk.kpis", Edit, Global),
    ("risk.kpis", Delete, Global),
    ("policy.library", View, Global),
    ("policy.library", Create, Global),
    ("policy.library", Edit, Global),
    ("policy.library", Delete, Global),
    ("policy.library", Approve, Global),
    ("policy.exceptions", View, Global),
    ("policy.exceptions", Create, Global),
    ("policy.exceptions", Edit, Global),
    ("policy.exceptions", Approve, Global),
    ("audit.engagements", View, Global),
    ("audit.engagements", Create, Global),
    ("audit.engagements", Edit, Global),
    ("audit.engagements", Delete, Global),
    ("audit.findings", View, Global),
    ("audit.findings", Create, Global),
    ("audit.findings", Edit, Global),
    ("audit.findings", Approve, Global),
    ("audit.workpapers", View, Global),
    ("audit.workpapers", Create, Global),
    ("audit.workpapers", Edit, Global),
    ("audit.settings", View, Global),
    ("audit.settings", Edit, Global),
    ("assets.inventory", View, Global),
    ("assets.inventory", Create, Global),
    ("assets.inventory", Edit, Global),
    ("assets.inventory", Delete, Global),
    ("admin.users", View, Global),
    ("admin.users", Create, Global),
    ("admin.users", Edit, Global),
    ("admin.users", Delete, Global),
    ("admin.departments", View, Global),
    ("admin.departments", Create, Global),
    ("admin.departments", Edit, Global),
    ("admin.departments", Delete, Global),
    ("admin.settings", View, Global),
    ("admin.settings", Edit, Global),
    ("reports.dashboards", View, Global),
];

/// Customer administrator: full authority over business content and identity
/// administration; audit areas are visible but owned by the audit roles.
const CUSTOMER_ADMINISTRATOR_GRANTS: &[RoleGrant] = &[
    ("compliance.frameworks", View, Global),
    ("compliance.frameworks", Create, Global),
    ("compliance.frameworks", Edit, Global),
    ("compliance.frameworks", Delete, Global),
    ("compliance.controls", View, Global),
    ("compliance.controls", Create, Global),
    ("compliance.controls", Edit, Global),
    ("compliance.controls", Delete, Global),
    ("compliance.controls", Approve, Global),
    ("compliance.governance", View, Global),
    ("compliance.governance", Create, Global),
    ("compliance.governance", Edit, Global),
    ("compliance.evidence", View, Global),
    ("compliance.evidence", Create, Global),
    ("compliance.evidence", Edit, Global),
    ("compliance.evidence", Delete, Global),
    ("risk.register", View, Global),
    ("risk.register", Create, Global),
    ("risk.register", Edit, Global),
    ("risk.register", Delete, Global),
    ("risk.register", Approve, Global),
    ("risk.assessments", View, Global),
    ("risk.assessments", Create, Global),
    ("risk.assessments", Edit, Global),
    ("risk.kpis", View, Global),
    ("risk.kpis", Create, Global),
    ("risk.kpis", Edit, Global),
    ("risk.kpis", Delete, Global),
    ("policy.library", View, Global),
    ("policy.library", Create, Global),
    ("policy.library", Edit, Global),
    ("policy.library", Delete, Global),
    ("policy.library", Approve, Global),
    ("policy.exceptions", View, Global),
    ("policy.exceptions", Create, Global),
    ("policy.exceptions", Edit, Global),
    ("policy.exceptions", Approve, Global),
    ("audit.engagements", View, Global),
    ("audit.findings", View, Global),
    ("audit.settings", View, Global),
    ("assets.inventory", View, Global),
    ("assets.inventory", Create, Global),
    ("assets.inventory", Edit, Global),
    ("assets.inventory", Delete, Global),
    ("admin.users", View, Global),
    ("admin.users", Create, Global),
    ("admin.users", Edit, Global),
    ("admin.users", Delete, Global),
    ("admin.departments", View, Global),
    ("admin.departments", Create, Global),
    ("admin.departments", Edit, Global),
    ("admin.departments", Delete, Global),
    ("admin.settings", View, Global),
    ("admin.settings", Edit, Global),
    ("reports.dashboards", View, Global),
];

/// Reviewer: read everything business-facing, approve what flows through
/// review queues.
const REVIEWER_GRANTS: &[RoleGrant] = &[
    ("compliance.frameworks", View, Global),
    ("compliance.controls", View, Global),
    ("compliance.controls", Approve, Global),
    ("compliance.governance", View, Global),
    ("compliance.governance", Edit, Global),
    ("compliance.evidence", View, Global),
    ("risk.register", View, Global),
    ("risk.register", Approve, Global),
    ("risk.assessments", View, Global),
    ("risk.kpis", View, Global),
    ("policy.library", View, Global),
    ("policy.library", Approve, Global),
    ("policy.exceptions", View, Global),
    ("policy.exceptions", Approve, Global),
    ("assets.inventory", View, Global),
    ("reports.dashboards", View, Global),
];

/// Contributor: create and maintain business content; no approval, deletion,
/// or administration. Also the fallback role for users with no assignment.
const CONTRIBUTOR_GRANTS: &[RoleGrant] = &[
    ("compliance.frameworks", View, Global),
    ("compliance.controls", View, Global),
    ("compliance.controls", Create, Global),
    ("compliance.controls", Edit, Global),
    ("compliance.governance", View, Global),
    ("compliance.governance", Create, Global),
    ("compliance.evidence", View, Global),
    ("compliance.evidence", Create, Global),
    ("compliance.evidence", Edit, Global),
    ("risk.register", View, Global),
    ("risk.register", Create, Global),
    ("risk.register", Edit, Global),
    ("risk.assessments", View, Global),
    ("risk.assessments", Create, Global),
    ("risk.assessments", Edit, Global),
    ("risk.kpis", View, Global),
    ("risk.kpis", Create, Global),
    ("risk.kpis", Edit, Global),
    ("policy.library", View, Global),
    ("policy.library", Create, Global),
    ("policy.library", Edit, Global),
    ("policy.exceptions", View, Global),
    ("policy.exceptions", Create, Global),
    ("assets.inventory", View, Global),
    ("assets.inventory", Create, Global),
    ("assets.inventory", Edit, Global),
    ("reports.dashboards", View, Global),
];

/// Same shape as [`REVIEWER_GRANTS`], scoped to the acting user's department.
const DEPARTMENT_REVIEWER_GRANTS: &[RoleGrant] = &[
    ("compliance.frameworks", View, Department),
    ("compliance.controls", View, Department),
    ("compliance.controls", Approve, Department),
    ("compliance.governance", View, Department),
    ("compliance.governance", Edit, Department),
    ("compliance.evidence", View, Department),
    ("risk.register", View, Department),
    ("risk.register", Approve, Department),
    ("risk.assessments", View, Department),
    ("risk.kpis", View, Department),
    ("policy.library", View, Department),
    ("policy.library", Approve, Department),
    ("policy.exceptions", View, Department),
    ("policy.exceptions", Approve, Department),
    ("assets.inventory", View, Department),
    ("reports.dashboards", View, Department),
];

/// Same shape as [`CONTRIBUTOR_GRANTS`], scoped to the acting user's
/// department.
const DEPARTMENT_CONTRIBUTOR_GRANTS: &[RoleGrant] = &[
    ("compliance.frameworks", View, Department),
    ("compliance.controls", View, Department),
    ("compliance.controls", Create, Department),
    ("compliance.controls", Edit, Department),
    ("compliance.governance", View, Department),
    ("compliance.governance", Create, Department),
    ("compliance.evidence", View, Department),
    ("compliance.evidence", Create, Department),
    ("compliance.evidence", Edit, Department),
    ("risk.register", View, Department),
    ("risk.register", Create, Department),
    ("risk.register", Edit, Department),
    ("risk.assessments", View, Department),
    ("risk.assessments", Create, Department),
    ("risk.assessments", Edit, Department),
    ("risk.kpis", View, Department),
    ("risk.kpis", Create, Department),
    ("risk.kpis", Edit, Department),
    ("policy.library", View, Department),
    ("policy.library", Create, Department),
    ("policy.library", Edit, Department),
    ("policy.exceptions", View, Department),
    ("policy.exceptions", Create, Department),
    ("assets.inventory", View, Department),
    ("assets.inventory", Create, Department),
    ("assets.inventory", Edit, Department),
    ("reports.dashboards", View, Department),
];

/// Auditor: field work — read the audited material, write findings and
/// workpapers.
const AUDITOR_GRANTS: &[RoleGrant] = &[
    ("audit.engagements", View, Global),
    ("audit.findings", View, Global),
    ("audit.findings", Create, Global),
    ("audit.findings", Edit, Global),
    ("audit.workpapers", View, Global),
    ("audit.workpapers", Create, Global),
    ("audit.workpapers", Edit, Global),
    ("compliance.frameworks", View, Global),
    ("compliance.controls", View, Global),
    ("compliance.evidence", View, Global),
    ("risk.register", View, Global),
    ("policy.library", View, Global),
    ("reports.dashboards", View, Global),
];

/// Auditee: the audited side — sees what concerns them, supplies evidence.
const AUDITEE_GRANTS: &[RoleGrant] = &[
    ("audit.engagements", View, Global),
    ("audit.findings", View, Global),
    ("compliance.evidence", View, Global),
    ("compliance.evidence", Create, Global),
    ("compliance.evidence", Edit, Global),
    ("reports.dashboards", View, Global),
];

/// Audit head: full authority over the audit module, including its settings.
const AUDIT_HEAD_GRANTS: &[RoleGrant] = &[
    ("audit.engagements", View, Global),
    ("audit.engagements", Create, Global),
    ("audit.engagements", Edit, Global),
    ("audit.engagements", Delete, Global),
    ("audit.findings", View, Global),
    ("audit.findings", Create, Global),
    ("audit.findings", Edit, Global),
    ("audit.findings", Approve, Global),
    ("audit.workpapers", View, Global),
    ("audit.workpapers", Create, Global),
    ("audit.workpapers", Edit, Global),
    ("audit.settings", View, Global),
    ("audit.settings", Edit, Global),
    ("compliance.frameworks", View, Global),
    ("compliance.controls", View, Global),
    ("compliance.evidence", View, Global),
    ("risk.register", View, Global),
    ("reports.dashboards", View, Global),
];

/// Audit manager: runs engagements and signs off findings; settings are
/// read-only.
const AUDIT_MANAGER_GRANTS: &[RoleGrant] = &[
    ("audit.engagements", View, Global),
    ("audit.engagements", Create, Global),
    ("audit.engagements", Edit, Global),
    ("audit.findings", View, Global),
    ("audit.findings", Create, Global),
    ("audit.findings", Edit, Global),
    ("audit.findings", Approve, Global),
    ("audit.workpapers", View, Global),
    ("audit.workpapers", Create, Global),
    ("audit.workpapers", Edit, Global),
    ("audit.settings", View, Global),
    ("compliance.evidence", View, Global),
    ("reports.dashboards", View, Global),
];

/// Audit user: read-only visibility into the audit module.
const AUDIT_USER_GRANTS: &[RoleGrant] = &[
    ("audit.engagements", View, Global),
    ("audit.findings", View, Global),
    ("audit.workpapers", View, Global),
    ("reports.dashboards", View, Global),
];

/// Grant table for a role name.
///
/// Unknown role names resolve to an empty table — stale role references in a
/// user's assignment are tolerated, not errors.
pub fn role_grants(role: &str) -> &'static [RoleGrant] {
    match role {
        GRC_ADMINISTRATOR => GRC_ADMINISTRATOR_GRANTS,
        CUSTOMER_ADMINISTRATOR => CUSTOMER_ADMINISTRATOR_GRANTS,
        REVIEWER => REVIEWER_GRANTS,
        CONTRIBUTOR => CONTRIBUTOR_GRANTS,
        AUDITOR => AUDITOR_GRANTS,
        AUDITEE => AUDITEE_GRANTS,
        AUDIT_HEAD => AUDIT_HEAD_GRANTS,
        AUDIT_MANAGER => AUDIT_MANAGER_GRANTS,
        AUDIT_USER => AUDIT_USER_GRANTS,
        DEPARTMENT_REVIEWER => DEPARTMENT_REVIEWER_GRANTS,
        DEPARTMENT_CONTRIBUTOR => DEPARTMENT_CONTRIBUTOR_GRANTS,
        _ => &[],
    }
}

/// Whether this role name is one of the eleven defined roles.
pub fn is_defined(role: &str) -> bool {
    ROLE_NAMES.contains(&role)
}
