//! Shared test harness: a fully migrated server over a tempfile SQLite
//! database, driven in-process through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use fleet_server::{AppState, Config, api};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "depot-admin-secret";

pub struct TestServer {
    pub app: Router,
    pub state: AppState,
    // Holds the database directory alive for the test's duration
    _tmp: TempDir,
}

/// Boot a fresh server: tempfile database, migrations, seeded admin.
pub async fn setup() -> TestServer {
    let tmp = tempfile::tempdir().expect("create tempdir");
    let db_path = tmp.path().join("fleet-test.db");

    let mut config = Config::with_overrides(db_path.to_string_lossy(), 0);
    config.admin_password = Some(ADMIN_PASSWORD.to_string());
    config.jwt.secret = "integration-test-secret-key-32-bytes!".to_string();

    let state = AppState::new(&config).await.expect("initialize state");
    let app = api::create_router(state.clone());

    TestServer {
        app,
        state,
        _tmp: tmp,
    }
}

/// Fire one request at the router and decode the JSON response.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should not error");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Login and return the bearer token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("token in response").to_string()
}

/// Login as the seeded admin.
pub async fn admin_token(app: &Router) -> String {
    login(app, ADMIN_USERNAME, ADMIN_PASSWORD).await
}
