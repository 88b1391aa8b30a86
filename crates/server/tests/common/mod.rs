use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::auth_client::AuthApiClient;
use server::rate_limit::RateLimitState;
use server::state::AppState;
use shared_types::AuthApiConfig;
use std::time::Duration;
use tower::ServiceExt;

#[allow(dead_code)]
/// Router whose upstream points at a closed port, for tests that must never
/// reach the authentication API.
pub fn offline_app(max_login_attempts: u32) -> Router {
    let config = AuthApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        timeout_secs: 1,
        ..AuthApiConfig::default()
    };
    let state = AppState {
        auth: AuthApiClient::new(config),
        login_limiter: RateLimitState::new(max_login_attempts, Duration::from_secs(60)),
    };
    server::rest::api_router(state)
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body.
pub async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
