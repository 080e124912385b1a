use axum::Json;
use axum::extract::Extension;
use axum::response::IntoResponse;

use aegisgrc_auth::default_navigation;

use crate::context::PrincipalContext;

/// GET /navigation — the navigation tree pruned to what the current
/// principal may see.
pub async fn navigation(Extension(ctx): Extension<PrincipalContext>) -> impl IntoResponse {
    let tree = default_navigation().filter(ctx.effective());
    Json(serde_json::json!({ "items": tree.items }))
}
