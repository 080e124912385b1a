use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use aegisgrc_auth::{Principal, TokenValidator, can_access_route, default_navigation};

use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenValidator>,
}

/// Session validation on request entry.
///
/// Resolves the bearer token to a principal and attaches the principal plus
/// its effective permission set to the request extensions.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_bearer(req.headers())?;

    let claims = state
        .tokens
        .validate(token, Utc::now())
        .map_err(|_e| StatusCode::UNAUTHORIZED)?;

    let principal = Principal::from_claims(&claims);
    req.extensions_mut().insert(PrincipalContext::new(principal));

    Ok(next.run(req).await)
}

/// Where denied page requests land.
const ACCESS_DENIED_LOCATION: &str = "/dashboard?accessDenied=true";

/// Route-entry guard.
///
/// Paths listed in the navigation tree require a viewable match; everything
/// else passes through (unguarded authenticated pages). Denials land on the
/// dashboard with the `accessDenied` query flag.
pub async fn route_guard(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if let Some(ctx) = req.extensions().get::<PrincipalContext>() {
        let path = req.uri().path();
        if !can_access_route(ctx.effective(), default_navigation(), path) {
            tracing::info!(path, user = %ctx.principal().user_id, "route access denied");
            return Redirect::to(ACCESS_DENIED_LOCATION).into_response();
        }
    }
    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(token)
}
