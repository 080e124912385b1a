//! RBAC audit endpoints for transparent authorization debugging.
//!
//! These endpoints expose the roles, the permission catalog, and individual
//! authorization decisions, to answer "why was this request denied?" without
//! reading the grant tables.

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use aegisgrc_auth::{Action, Grant, catalog, explain_access, roles};
use aegisgrc_core::DepartmentId;

use crate::app::errors;
use crate::authz;
use crate::context::PrincipalContext;

// ─────────────────────────────────────────────────────────────────────────────
// Query Parameters
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExplainQuery {
    pub resource: String,
    pub action: String,
    /// Department owning the record under access, for department-scoped
    /// grants.
    pub record_department: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

pub fn router() -> Router {
    Router::new()
        .route("/roles", get(list_roles))
        .route("/roles/:name", get(get_role))
        .route("/permissions", get(list_permissions))
        .route("/explain", get(explain_decision))
}

fn role_to_json(name: &str) -> serde_json::Value {
    let grants: Vec<Grant> = roles::role_grants(name)
        .iter()
        .map(|(resource, action, scope)| Grant::new(*resource, *action, *scope))
        .collect();
    serde_json::json!({ "name": name, "grants": grants })
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /admin/rbac/roles — all defined roles and their grants.
pub async fn list_roles(Extension(ctx): Extension<PrincipalContext>) -> axum::response::Response {
    if let Err(denied) = authz::require(&ctx, "admin.users", Action::View) {
        return denied;
    }

    let roles_json: Vec<_> = roles::ROLE_NAMES.iter().map(|n| role_to_json(n)).collect();
    (StatusCode::OK, Json(serde_json::json!({ "roles": roles_json }))).into_response()
}

/// GET /admin/rbac/roles/:name — one role and its grants.
pub async fn get_role(
    Extension(ctx): Extension<PrincipalContext>,
    Path(name): Path<String>,
) -> axum::response::Response {
    if let Err(denied) = authz::require(&ctx, "admin.users", Action::View) {
        return denied;
    }

    if !roles::is_defined(&name) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "role not found");
    }

    (StatusCode::OK, Json(serde_json::json!({ "role": role_to_json(&name) }))).into_response()
}

/// GET /admin/rbac/permissions — the full permission catalog.
pub async fn list_permissions(
    Extension(ctx): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(denied) = authz::require(&ctx, "admin.users", Action::View) {
        return denied;
    }

    let permissions: Vec<_> = catalog::entries()
        .map(|entry| {
            serde_json::json!({
                "resource": entry.resource,
                "actions": entry.actions.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "permissions": permissions })),
    )
        .into_response()
}

/// GET /admin/rbac/explain?resource=X&action=Y — explain the decision for
/// the current principal. Any authenticated user may inspect their own
/// access.
pub async fn explain_decision(
    Extension(ctx): Extension<PrincipalContext>,
    Query(query): Query<ExplainQuery>,
) -> axum::response::Response {
    let action: Action = match query.action.parse() {
        Ok(action) => action,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_action", e.to_string());
        }
    };

    let record_department = match query.record_department.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<DepartmentId>() {
            Ok(id) => Some(id),
            Err(e) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string());
            }
        },
    };

    let department_context = ctx.department_context(record_department);
    let explanation = explain_access(
        ctx.principal(),
        &query.resource,
        action,
        Some(&department_context),
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({ "explanation": explanation })),
    )
        .into_response()
}
