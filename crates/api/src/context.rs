use aegisgrc_auth::{DepartmentContext, EffectivePermissions, Principal};
use aegisgrc_core::DepartmentId;

/// Principal context for a request: the authenticated identity plus the
/// effective permission set derived fresh at session validation.
///
/// The effective set is a value, shared copy-on-read; nothing mutates it
/// after the middleware attaches it.
#[derive(Debug, Clone)]
pub struct PrincipalContext {
    principal: Principal,
    effective: EffectivePermissions,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        let effective = principal.effective_permissions();
        Self {
            principal,
            effective,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn effective(&self) -> &EffectivePermissions {
        &self.effective
    }

    /// Check context for a record owned by `record_department`, against the
    /// acting user's current department.
    pub fn department_context(&self, record_department: Option<DepartmentId>) -> DepartmentContext {
        DepartmentContext::new(record_department, self.principal.department_id)
    }
}
