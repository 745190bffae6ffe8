use axum::body::{to_bytes, Body};
use http::{header, Request, StatusCode};
use httpmock::prelude::*;
use jobboard_client::{IdentityClient, IdentityConfig};
use jobboard_types::ClientConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{api_router, AppState};

fn state_for(server: &MockServer) -> AppState {
    AppState {
        identity: IdentityClient::new(IdentityConfig {
            api_key: "test-key".into(),
            endpoint: server.base_url(),
            token_endpoint: server.base_url(),
        }),
        client_config: ClientConfig::from_base_url("http://backend.test:8000"),
    }
}

async fn call(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = api_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn mock_sign_in_error(server: &MockServer, message: &str) {
    let body = json!({ "error": { "code": 400, "message": message } });
    server
        .mock_async(move |when, then| {
            when.method(POST).path("/accounts:signInWithPassword");
            then.status(400).json_body(body);
        })
        .await;
}

#[tokio::test]
async fn health_reports_ok() {
    let server = MockServer::start_async().await;
    let request = Request::get("/api/v1/health").body(Body::empty()).unwrap();
    let (status, body) = call(state_for(&server), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn config_exposes_postings_url() {
    let server = MockServer::start_async().await;
    let request = Request::get("/api/v1/config").body(Body::empty()).unwrap();
    let (status, body) = call(state_for(&server), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["postings_url"], "http://backend.test:8000/postings");
}

#[tokio::test]
async fn login_returns_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/accounts:signInWithPassword");
            then.status(200).json_body(json!({
                "localId": "uid-1",
                "email": "kim@example.com",
                "idToken": "id-1",
                "refreshToken": "refresh-1",
                "expiresIn": "3600"
            }));
        })
        .await;

    let request = post_json(
        "/api/v1/auth/login",
        json!({ "email": "kim@example.com", "password": "hunter2" }),
    );
    let (status, body) = call(state_for(&server), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uid"], "uid-1");
    assert_eq!(body["id_token"], "id-1");
    assert!(body["expires_at_ms"].as_u64().unwrap() > 3_600_000);
}

#[tokio::test]
async fn login_with_bad_password_is_401() {
    let server = MockServer::start_async().await;
    mock_sign_in_error(&server, "INVALID_LOGIN_CREDENTIALS").await;

    let request = post_json(
        "/api/v1/auth/login",
        json!({ "email": "kim@example.com", "password": "nope" }),
    );
    let (status, body) = call(state_for(&server), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid email or password");
}

#[tokio::test]
async fn login_status_follows_failure_kind() {
    let cases = [
        ("USER_DISABLED", StatusCode::FORBIDDEN),
        ("TOO_MANY_ATTEMPTS_TRY_LATER", StatusCode::TOO_MANY_REQUESTS),
        ("OPERATION_NOT_ALLOWED", StatusCode::BAD_REQUEST),
    ];
    for (code, expected) in cases {
        let server = MockServer::start_async().await;
        mock_sign_in_error(&server, code).await;
        let request = post_json(
            "/api/v1/auth/login",
            json!({ "email": "kim@example.com", "password": "pw" }),
        );
        let (status, _) = call(state_for(&server), request).await;
        assert_eq!(status, expected, "provider code {code}");
    }
}

#[tokio::test]
async fn login_without_password_is_400() {
    let server = MockServer::start_async().await;
    let request = post_json(
        "/api/v1/auth/login",
        json!({ "email": "kim@example.com", "password": "" }),
    );
    let (status, body) = call(state_for(&server), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email and password are required");
}

#[tokio::test]
async fn refresh_returns_new_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/token");
            then.status(200).json_body(json!({
                "id_token": "id-2",
                "refresh_token": "refresh-2",
                "expires_in": "3600",
                "user_id": "uid-1"
            }));
        })
        .await;

    let request = post_json(
        "/api/v1/auth/refresh",
        json!({
            "uid": "uid-1",
            "email": "kim@example.com",
            "display_name": null,
            "id_token": "id-1",
            "refresh_token": "refresh-1",
            "expires_at_ms": 0
        }),
    );
    let (status, body) = call(state_for(&server), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id_token"], "id-2");
    assert_eq!(body["email"], "kim@example.com");
}

#[tokio::test]
async fn refresh_with_revoked_token_is_401() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/token");
            then.status(400)
                .json_body(json!({ "error": { "code": 400, "message": "TOKEN_EXPIRED" } }));
        })
        .await;

    let request = post_json(
        "/api/v1/auth/refresh",
        json!({
            "uid": "uid-1",
            "email": null,
            "display_name": null,
            "id_token": "id-1",
            "refresh_token": "refresh-1",
            "expires_at_ms": 0
        }),
    );
    let (status, body) = call(state_for(&server), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "session expired, please sign in again");
}
