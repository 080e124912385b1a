//! Application assembly: router and middleware stack.

use std::sync::Arc;

use axum::{Router, http::StatusCode, routing::get};
use tower::ServiceBuilder;

use aegisgrc_auth::{Hs256TokenValidator, TokenValidator};

use crate::middleware::{AuthState, auth_middleware, route_guard};

pub mod errors;
pub mod routes;

/// Build the application router with the HS256 session validator.
pub fn build_app(session_secret: String) -> Router {
    let tokens: Arc<dyn TokenValidator> =
        Arc::new(Hs256TokenValidator::new(session_secret.as_bytes()));
    build_app_with_validator(tokens)
}

/// Build the application router with an explicit authentication provider.
pub fn build_app_with_validator(tokens: Arc<dyn TokenValidator>) -> Router {
    let auth_state = AuthState { tokens };

    // Everything except /health requires a valid session, then passes the
    // route guard. ServiceBuilder runs its layers top to bottom.
    let protected = routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn_with_state(
                auth_state,
                auth_middleware,
            ))
            .layer(axum::middleware::from_fn(route_guard)),
    );

    Router::new().route("/health", get(health)).merge(protected)
}

async fn health() -> StatusCode {
    StatusCode::OK
}
