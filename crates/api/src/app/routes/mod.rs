use axum::{Router, routing::get};

pub mod nav;
pub mod rbac;
pub mod system;

/// Router for all authenticated endpoints.
///
/// The fallback covers page routes: rendering is a front-end concern, but
/// every page path still passes session validation and the route guard.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/navigation", get(nav::navigation))
        .nest("/admin/rbac", rbac::router())
        .fallback(get(system::page))
}
