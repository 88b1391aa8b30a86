use crate::common::{self, BROKEN_EMAIL, DOCTOR_EMAIL, NURSE_EMAIL, PASSWORD, THROTTLED_EMAIL};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, Role};

fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn sign_in_returns_tokens_and_profile() {
    let (client, _mock) = common::test_client().await;

    let session = client
        .sign_in(&credentials(DOCTOR_EMAIL, PASSWORD))
        .await
        .unwrap();

    assert_eq!(session.tokens.access, common::LIVE_ACCESS);
    assert_eq!(session.tokens.refresh, common::REFRESH);
    assert_eq!(session.user.role, Role::Doctor);
    assert_eq!(session.user.full_name(), "Meredith Grey");
    assert_eq!(session.user.role.dashboard_path(), "/dashboard/doctor");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let (client, _mock) = common::test_client().await;

    let err = client
        .sign_in(&credentials(DOCTOR_EMAIL, "guess"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn unknown_role_fails_the_sign_in() {
    let (client, _mock) = common::test_client().await;

    let err = client
        .sign_in(&credentials(NURSE_EMAIL, PASSWORD))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert!(err.message.contains("unsupported role"), "{}", err.message);
}

#[tokio::test]
async fn upstream_throttling_is_reported_as_rate_limited() {
    let (client, _mock) = common::test_client().await;

    let err = client
        .login(&credentials(THROTTLED_EMAIL, PASSWORD))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::RateLimited);
}

#[tokio::test]
async fn upstream_server_error_is_upstream_kind() {
    let (client, _mock) = common::test_client().await;

    let err = client
        .login(&credentials(BROKEN_EMAIL, PASSWORD))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "Authentication service error (500)");
}

#[tokio::test]
async fn refresh_keeps_refresh_token_when_not_rotated() {
    let (client, mock) = common::test_client().await;

    let tokens = client.refresh(common::REFRESH).await.unwrap();

    assert_eq!(tokens.access, common::FRESH_ACCESS);
    assert_eq!(tokens.refresh, common::REFRESH);
    assert_eq!(mock.refreshes(), 1);
}
