//! Authorization decisions over an effective permission set.
//!
//! Both checks are synchronous, idempotent, side-effect-free decision
//! functions: they never throw across the boundary, and malformed input
//! resolves to a definite `false` (or "unguarded, allow" in the one
//! route-fallback case below).

use aegisgrc_core::DepartmentId;

use crate::{Action, EffectivePermissions, NavTree, Scope, catalog};

/// Department comparison inputs for a department-scoped check.
///
/// Built fresh per check from the *current* acting user's department, never
/// cached from session creation, so a department reassignment takes effect
/// immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepartmentContext {
    /// Department that owns the record under access.
    pub record_department: Option<DepartmentId>,
    /// The acting user's own department.
    pub acting_department: Option<DepartmentId>,
}

impl DepartmentContext {
    pub fn new(
        record_department: Option<DepartmentId>,
        acting_department: Option<DepartmentId>,
    ) -> Self {
        Self {
            record_department,
            acting_department,
        }
    }

    /// Both sides must be present and equal; anything missing fails closed.
    fn matches(&self) -> bool {
        match (self.record_department, self.acting_department) {
            (Some(record), Some(acting)) => record == acting,
            _ => false,
        }
    }
}

/// Decide whether the effective set allows `action` on `resource`.
///
/// A pair the catalog does not declare is a configuration gap: logged and
/// denied (nothing can ever have been granted for it). A department-scoped
/// grant allows access only when the check context proves the record belongs
/// to the acting user's department.
pub fn has_permission(
    effective: &EffectivePermissions,
    resource: &str,
    action: Action,
    context: Option<&DepartmentContext>,
) -> bool {
    if !catalog::is_defined(resource, action) {
        tracing::warn!(
            resource,
            action = action.as_str(),
            "permission check against a pair the catalog does not declare; denying"
        );
        return false;
    }

    match effective.scope_of(resource, action) {
        Some(Scope::Global) => true,
        Some(Scope::Department) => context.is_some_and(DepartmentContext::matches),
        None => false,
    }
}

/// Route-level authorization: map a URL path to the navigation items that
/// would render it (exact `href` match) and require at least one matching
/// item to be viewable.
///
/// Paths with no matching navigation entry are allowed — unguarded routes
/// such as the dashboard landing page stay reachable for any authenticated
/// user. This is the single deliberate fail-open in the subsystem; explicit
/// resource/action checks always fail closed.
pub fn can_access_route(effective: &EffectivePermissions, tree: &NavTree, path: &str) -> bool {
    let matched = tree.find_by_href(path);
    if matched.is_empty() {
        return true;
    }

    matched.iter().any(|item| {
        item.always_visible
            || match &item.resource {
                None => true,
                Some(resource) => has_permission(effective, resource.as_str(), Action::View, None),
            }
    })
}
