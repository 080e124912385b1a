//! Authorization decision explanation (audit trail).
//!
//! Answers "why was this request allowed/denied?" for the RBAC audit
//! endpoints. Pure over the same inputs as [`crate::check::has_permission`];
//! the decision reported here always agrees with the check itself.

use serde::Serialize;

use crate::check::{DepartmentContext, has_permission};
use crate::{Action, Principal, Scope, catalog, roles};

/// Detailed explanation of an authorization decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    /// The resource that was being checked.
    pub resource: String,

    /// The action that was being checked.
    pub action: Action,

    /// Whether the authorization was granted.
    pub granted: bool,

    /// Scope the decision resolved at, when a grant exists.
    pub scope: Option<Scope>,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Roles held by the principal that contribute a grant for this pair.
    pub contributing_roles: Vec<String>,

    /// If denied, this explains what was missing.
    pub denial: Option<DenialReason>,
}

/// Detailed reason why authorization was denied.
#[derive(Debug, Clone, Serialize)]
pub struct DenialReason {
    pub kind: DenialKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    /// The catalog does not declare this (resource, action) pair.
    UndeclaredPermission,
    /// No held role grants this pair.
    MissingGrant,
    /// The grant is department-scoped and the context did not prove a match.
    DepartmentMismatch,
}

/// Explain why an authorization decision was made (or would be made).
pub fn explain_access(
    principal: &Principal,
    resource: &str,
    action: Action,
    context: Option<&DepartmentContext>,
) -> AccessExplanation {
    let held = principal.resolved_roles();
    let contributing_roles: Vec<String> = held
        .iter()
        .filter(|role| grants_pair(role.as_str(), resource, action))
        .map(|role| role.as_str().to_string())
        .collect();

    if !catalog::is_defined(resource, action) {
        return AccessExplanation {
            resource: resource.to_string(),
            action,
            granted: false,
            scope: None,
            reason: format!("the catalog does not declare {resource}:{action}"),
            contributing_roles,
            denial: Some(DenialReason {
                kind: DenialKind::UndeclaredPermission,
                message: "nothing can be granted for an undeclared pair".to_string(),
                suggestions: vec![format!(
                    "Declare {resource}:{action} in the permission catalog before granting it"
                )],
            }),
        };
    }

    let effective = principal.effective_permissions();
    let scope = effective.scope_of(resource, action);
    let granted = has_permission(&effective, resource, action, context);

    let (reason, denial) = match scope {
        Some(Scope::Global) => (
            format!(
                "granted globally by role(s): {}",
                contributing_roles.join(", ")
            ),
            None,
        ),
        Some(Scope::Department) if granted => (
            "granted for the acting user's own department".to_string(),
            None,
        ),
        Some(Scope::Department) => {
            let context_complete = context
                .is_some_and(|c| c.record_department.is_some() && c.acting_department.is_some());
            let message = if context_complete {
                "the record belongs to a different department than the acting user".to_string()
            } else {
                "the grant is department-scoped and no complete department context was supplied"
                    .to_string()
            };
            (
                format!("department-scoped grant did not match: {message}"),
                Some(DenialReason {
                    kind: DenialKind::DepartmentMismatch,
                    message,
                    suggestions: vec![
                        "Supply both the record's department and the acting user's department"
                            .to_string(),
                        format!("Assign a role granting {resource}:{action} globally"),
                    ],
                }),
            )
        }
        None => {
            let mut suggestions: Vec<String> = roles::ROLE_NAMES
                .iter()
                .filter(|name| grants_pair(name, resource, action))
                .map(|name| format!("Assign the {name} role (grants {resource}:{action})"))
                .collect();
            if suggestions.is_empty() {
                suggestions.push(format!("No defined role grants {resource}:{action}"));
            }
            (
                format!("no held role grants {resource}:{action}"),
                Some(DenialReason {
                    kind: DenialKind::MissingGrant,
                    message: format!("missing grant for {resource}:{action}"),
                    suggestions,
                }),
            )
        }
    };

    AccessExplanation {
        resource: resource.to_string(),
        action,
        granted,
        scope,
        reason,
        contributing_roles,
        denial,
    }
}

fn grants_pair(role: &str, resource: &str, action: Action) -> bool {
    roles::role_grants(role)
        .iter()
        .any(|(r, a, _)| *r == resource && *a == action)
}
