use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;

use aegisgrc_auth::{Role, SessionClaims};
use aegisgrc_core::{DepartmentId, UserId};

const SECRET: &str = "black-box-test-secret";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = aegisgrc_api::app::build_app(SECRET.to_string());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_token(roles: Vec<Role>, department_id: Option<DepartmentId>) -> String {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: UserId::new(),
        department_id,
        roles,
        issued_at: now,
        expires_at: now + ChronoDuration::minutes(10),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("failed to encode session token")
}

/// Redirects must stay observable, so the client never follows them.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn get_json(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    path: &str,
) -> (StatusCode, serde_json::Value) {
    let response = client
        .get(format!("{base_url}{path}"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body = response.json().await.unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_needs_no_token() {
    let server = TestServer::spawn().await;

    let response = client()
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let server = TestServer::spawn().await;

    let response = client()
        .get(format!("{}/whoami", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let server = TestServer::spawn().await;

    let now = Utc::now();
    let claims = SessionClaims {
        sub: UserId::new(),
        department_id: None,
        roles: vec![Role::new("Reviewer")],
        issued_at: now - ChronoDuration::minutes(30),
        expires_at: now - ChronoDuration::minutes(20),
    };
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let response = client()
        .get(format!("{}/whoami", server.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn whoami_reports_identity_and_roles() {
    let server = TestServer::spawn().await;
    let token = mint_token(vec![Role::new("Reviewer")], None);

    let (status, body) = get_json(&client(), &server.base_url, &token, "/whoami").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roles"], serde_json::json!(["Reviewer"]));
    assert!(body["permissions"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn navigation_is_filtered_per_principal() {
    let server = TestServer::spawn().await;
    let token = mint_token(vec![Role::new("AuditUser")], None);

    let (status, body) = get_json(&client(), &server.base_url, &token, "/navigation").await;
    assert_eq!(status, StatusCode::OK);

    let labels: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap())
        .collect();

    assert!(labels.contains(&"Dashboard"));
    assert!(labels.contains(&"Audit"));
    // No admin grants: the group header itself must not appear.
    assert!(!labels.contains(&"Administration"));
}

#[tokio::test]
async fn rbac_audit_surface_requires_admin() {
    let server = TestServer::spawn().await;
    let http = client();

    let reviewer = mint_token(vec![Role::new("Reviewer")], None);
    let (status, _) = get_json(&http, &server.base_url, &reviewer, "/admin/rbac/roles").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = mint_token(vec![Role::new("GRCAdministrator")], None);
    let (status, body) = get_json(&http, &server.base_url, &admin, "/admin/rbac/roles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roles"].as_array().unwrap().len(), 11);

    let (status, _) = get_json(&http, &server.base_url, &admin, "/admin/rbac/roles/Auditee").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get_json(&http, &server.base_url, &admin, "/admin/rbac/roles/NoSuchRole").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get_json(&http, &server.base_url, &admin, "/admin/rbac/permissions").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["permissions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn explain_is_self_service() {
    let server = TestServer::spawn().await;
    let token = mint_token(vec![Role::new("AuditUser")], None);

    let (status, body) = get_json(
        &client(),
        &server.base_url,
        &token,
        "/admin/rbac/explain?resource=audit.settings&action=edit",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["explanation"]["granted"], serde_json::json!(false));

    let (status, body) = get_json(
        &client(),
        &server.base_url,
        &token,
        "/admin/rbac/explain?resource=audit.findings&action=view",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["explanation"]["granted"], serde_json::json!(true));
}

#[tokio::test]
async fn route_guard_redirects_denied_pages() {
    let server = TestServer::spawn().await;
    let token = mint_token(vec![Role::new("AuditUser")], None);

    let response = client()
        .get(format!("{}/risk/register", server.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()["location"],
        "/dashboard?accessDenied=true"
    );
}

#[tokio::test]
async fn route_guard_allows_granted_pages() {
    let server = TestServer::spawn().await;
    let token = mint_token(vec![Role::new("Reviewer")], None);

    let response = client()
        .get(format!("{}/risk/register", server.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn route_guard_is_open_for_unlisted_paths() {
    let server = TestServer::spawn().await;
    // No grants at all beyond the Contributor fallback.
    let token = mint_token(vec![Role::new("AuditUser")], None);

    let response = client()
        .get(format!("{}/profile/settings", server.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn zero_roles_fall_back_to_contributor() {
    let server = TestServer::spawn().await;
    let http = client();
    let token = mint_token(vec![], None);

    // Contributor can open the controls page...
    let response = http
        .get(format!("{}/compliance/controls", server.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // ...but has no administrative access.
    let (status, _) = get_json(&http, &server.base_url, &token, "/admin/rbac/roles").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = get_json(&http, &server.base_url, &token, "/whoami").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roles"], serde_json::json!([]));
    assert!(body["permissions"].as_u64().unwrap() > 0);
}
