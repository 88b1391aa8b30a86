use axum::http::StatusCode;
use crate::common::{self, DOCTOR_EMAIL, LIVE_ACCESS, PASSWORD};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::LoginResponse;

#[tokio::test]
async fn login_proxy_returns_session() {
    let (app, mock) = common::test_app(5).await;

    let (status, body) = common::post_json(
        &app,
        "/api/v1/auth/login",
        &json!({ "email": DOCTOR_EMAIL, "password": PASSWORD }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let session: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(session.tokens.access, LIVE_ACCESS);
    assert_eq!(session.user.first_name, "Meredith");
    assert_eq!(mock.logins(), 1);
}

#[tokio::test]
async fn login_proxy_rejects_bad_credentials() {
    let (app, _mock) = common::test_app(5).await;

    let (status, body) = common::post_json(
        &app,
        "/api/v1/auth/login",
        &json!({ "email": DOCTOR_EMAIL, "password": "nope" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "Unauthorized");
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn invalid_email_never_reaches_upstream() {
    let (app, mock) = common::test_app(5).await;

    let (status, body) = common::post_json(
        &app,
        "/api/v1/auth/login",
        &json!({ "email": "grey", "password": PASSWORD }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field_errors"]["email"], "Enter a valid email address");
    assert_eq!(mock.logins(), 0);
}

#[tokio::test]
async fn me_returns_profile_for_live_token() {
    let (app, _mock) = common::test_app(5).await;

    let (status, body) = common::get_with_token(&app, "/api/v1/auth/me", Some(LIVE_ACCESS)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "doctor");
    assert_eq!(body["email"], DOCTOR_EMAIL);
}

#[tokio::test]
async fn me_with_rejected_token_is_unauthorized() {
    let (app, _mock) = common::test_app(5).await;

    let (status, body) =
        common::get_with_token(&app, "/api/v1/auth/me", Some(common::STALE_ACCESS)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "Unauthorized");
}
