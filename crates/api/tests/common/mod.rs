//! Shared helpers for HTTP-level integration tests.
//!
//! Tests run against the in-memory [`FixtureStore`] and [`MemoryMailer`],
//! so no database or SMTP server is needed. The router is built through
//! [`washline_api::router::build_app_router`], the same constructor the
//! production binary uses, so every test exercises the full middleware
//! stack (CORS, request ID, timeout, tracing, panic recovery).

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use washline_api::auth::jwt::JwtConfig;
use washline_api::auth::password::hash_password;
use washline_api::config::ServerConfig;
use washline_api::router::build_app_router;
use washline_api::state::AppState;
use washline_db::models::user::{CreateUser, User};
use washline_db::{FixtureStore, LaundryStore};
use washline_mailer::MemoryMailer;

/// Build a test `ServerConfig` with a fixed JWT secret so tokens minted
/// in one request validate in the next.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router plus handles to the concrete store
/// and mailer so tests can seed data and inspect delivery attempts.
pub fn build_test_app() -> (Router, Arc<FixtureStore>, Arc<MemoryMailer>) {
    let config = test_config();
    let store = Arc::new(FixtureStore::new());
    let mailer = Arc::new(MemoryMailer::new());

    let state = AppState {
        store: store.clone(),
        mailer: mailer.clone(),
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), store, mailer)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(path)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Plaintext password used by every account created through [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123";

/// Create a user directly in the store with the given role.
///
/// Signup over HTTP always produces students, so staff and admin accounts
/// for tests are provisioned this way.
pub async fn create_user(store: &FixtureStore, email: &str, role: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    store
        .create_user(&CreateUser {
            email: email.to_string(),
            password_hash,
            full_name: format!("Test {role}"),
            role: role.to_string(),
            block: Some("A".to_string()),
            floor_number: Some(1),
            room_number: Some("101".to_string()),
            phone: None,
        })
        .await
        .expect("user creation should succeed")
}

/// Log in via the API and return the access token.
pub async fn login(app: Router, email: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login response must contain access_token")
        .to_string()
}

/// Create a user with the given role and log them in, returning the token.
pub async fn create_and_login(app: Router, store: &FixtureStore, email: &str, role: &str) -> String {
    create_user(store, email, role).await;
    login(app, email).await
}
