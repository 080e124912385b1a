use serde::{Deserialize, Serialize};

use aegisgrc_core::{DepartmentId, UserId};

use crate::claims::SessionClaims;
use crate::{EffectivePermissions, Role, expand, roles};

/// A fully resolved acting identity for authorization decisions.
///
/// Construction is intentionally decoupled from storage and transport: the
/// web layer builds this from validated session claims, workers can build it
/// from whatever identity source they use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub department_id: Option<DepartmentId>,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn from_claims(claims: &SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            department_id: claims.department_id,
            roles: claims.roles.clone(),
        }
    }

    /// Roles used for expansion.
    ///
    /// A user holding zero roles is treated as holding exactly `Contributor`
    /// — a deliberate fallback, so that an account with no assignment is
    /// never fully locked out.
    pub fn resolved_roles(&self) -> Vec<Role> {
        if self.roles.is_empty() {
            vec![Role::new(roles::CONTRIBUTOR)]
        } else {
            self.roles.clone()
        }
    }

    /// Derive the effective permission set for this principal.
    ///
    /// Computed fresh on every call; never cached across requests, so
    /// role-definition changes between deploys take effect at the next
    /// session validation.
    pub fn effective_permissions(&self) -> EffectivePermissions {
        expand(&self.resolved_roles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{AUDIT_USER, CONTRIBUTOR};

    fn principal_with_roles(names: &[&str]) -> Principal {
        Principal {
            user_id: UserId::new(),
            department_id: None,
            roles: names.iter().map(|n| Role::new(n.to_string())).collect(),
        }
    }

    #[test]
    fn zero_roles_fall_back_to_contributor() {
        let principal = principal_with_roles(&[]);

        assert_eq!(principal.resolved_roles(), vec![Role::new(CONTRIBUTOR)]);
        assert_eq!(
            principal.effective_permissions(),
            expand(&[Role::new(CONTRIBUTOR)])
        );
    }

    #[test]
    fn assigned_roles_suppress_the_fallback() {
        let principal = principal_with_roles(&[AUDIT_USER]);

        let effective = principal.effective_permissions();
        assert_eq!(effective, expand(&[Role::new(AUDIT_USER)]));
        assert_ne!(effective, expand(&[Role::new(CONTRIBUTOR)]));
    }
}
