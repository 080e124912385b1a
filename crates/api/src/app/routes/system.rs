use axum::Json;
use axum::extract::Extension;
use axum::http::Uri;
use axum::response::IntoResponse;

use crate::context::PrincipalContext;

/// GET /whoami — the authenticated identity and its effective grant count.
pub async fn whoami(Extension(ctx): Extension<PrincipalContext>) -> impl IntoResponse {
    let principal = ctx.principal();
    Json(serde_json::json!({
        "user_id": principal.user_id.to_string(),
        "department_id": principal.department_id.map(|d| d.to_string()),
        "roles": principal.roles.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
        "permissions": ctx.effective().len(),
    }))
}

/// Fallback for page routes.
///
/// The page shell is rendered client-side; reaching this handler means the
/// request passed session validation and the route guard.
pub async fn page(uri: Uri) -> impl IntoResponse {
    Json(serde_json::json!({ "path": uri.path() }))
}
