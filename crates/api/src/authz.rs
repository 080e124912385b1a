//! Handler-side authorization guard.
//!
//! Enforced at the handler boundary, before any work happens; the RBAC core
//! stays HTTP-agnostic.

use axum::http::StatusCode;
use axum::response::Response;

use aegisgrc_auth::{Action, has_permission};

use crate::app::errors;
use crate::context::PrincipalContext;

/// Require a permission in the current request context.
///
/// On denial returns the 403 response to send. Record-level (department
/// scoped) checks supply their own context via
/// [`PrincipalContext::department_context`] and call the core directly.
pub fn require(ctx: &PrincipalContext, resource: &str, action: Action) -> Result<(), Response> {
    if has_permission(ctx.effective(), resource, action, None) {
        Ok(())
    } else {
        Err(errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            format!("missing permission '{resource}:{action}'"),
        ))
    }
}
