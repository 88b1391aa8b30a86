use axum::http::StatusCode;
use crate::common::{self, DOCTOR_EMAIL, PASSWORD};
use serde_json::json;

#[tokio::test]
async fn login_returns_429_when_limit_exceeded() {
    // Allow only 2 attempts per 60s window
    let (app, mock) = common::test_app(2).await;
    let body = json!({ "email": DOCTOR_EMAIL, "password": "wrong" });

    let (s1, _) = common::post_json(&app, "/api/v1/auth/login", &body).await;
    assert_eq!(s1, StatusCode::UNAUTHORIZED, "First attempt should reach upstream");

    let (s2, _) = common::post_json(&app, "/api/v1/auth/login", &body).await;
    assert_eq!(s2, StatusCode::UNAUTHORIZED, "Second attempt should reach upstream");

    let (s3, body) = common::post_json(&app, "/api/v1/auth/login", &body).await;
    assert_eq!(s3, StatusCode::TOO_MANY_REQUESTS, "Third attempt should be limited");
    assert_eq!(body["kind"], "RateLimited");
    assert_eq!(mock.logins(), 2);
}

#[tokio::test]
async fn limit_is_tracked_per_client_address() {
    let (app, _mock) = common::test_app(1).await;
    let body = json!({ "email": DOCTOR_EMAIL, "password": PASSWORD });
    let uri = "/api/v1/auth/login";

    let (s1, _) = common::post_json_from(&app, uri, &body, Some("10.0.0.1")).await;
    assert_eq!(s1, StatusCode::OK);

    let (s2, _) = common::post_json_from(&app, uri, &body, Some("10.0.0.2, 172.16.0.1")).await;
    assert_eq!(s2, StatusCode::OK, "Different client should have its own window");

    let (s3, _) = common::post_json_from(&app, uri, &body, Some("10.0.0.1")).await;
    assert_eq!(s3, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn direct_connections_are_limited_per_peer_ip() {
    let (app, mock) = common::test_app(1).await;
    let body = json!({ "email": DOCTOR_EMAIL, "password": PASSWORD });
    let uri = "/api/v1/auth/login";

    let (s1, _) = common::post_json_from_peer(&app, uri, &body, "192.0.2.10:40001").await;
    assert_eq!(s1, StatusCode::OK);

    let (s2, _) = common::post_json_from_peer(&app, uri, &body, "192.0.2.20:40002").await;
    assert_eq!(s2, StatusCode::OK, "A second peer should not share the first one's window");

    let (s3, body) = common::post_json_from_peer(&app, uri, &body, "192.0.2.10:51515").await;
    assert_eq!(s3, StatusCode::TOO_MANY_REQUESTS, "Same IP on a new port is the same client");
    assert_eq!(body["kind"], "RateLimited");
    assert_eq!(mock.logins(), 2);
}

#[tokio::test]
async fn profile_lookup_is_not_rate_limited() {
    let (app, _mock) = common::test_app(1).await;

    for _ in 0..3 {
        let (status, _) =
            common::get_with_token(&app, "/api/v1/auth/me", Some(common::LIVE_ACCESS)).await;
        assert_eq!(status, StatusCode::OK);
    }
}
