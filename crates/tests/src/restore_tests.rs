use crate::common::{self, FRESH_ACCESS, LIVE_ACCESS, REFRESH, STALE_ACCESS};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role, TokenPair};

fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access: access.to_string(),
        refresh: refresh.to_string(),
    }
}

#[tokio::test]
async fn live_token_restores_without_refresh() {
    let (client, mock) = common::test_client().await;

    let session = client.restore(pair(LIVE_ACCESS, REFRESH)).await.unwrap();

    assert_eq!(session.user.role, Role::Doctor);
    assert_eq!(session.tokens.access, LIVE_ACCESS);
    assert_eq!(mock.refreshes(), 0);
}

#[tokio::test]
async fn rejected_token_is_refreshed_once() {
    let (client, mock) = common::test_client().await;

    let session = client.restore(pair(STALE_ACCESS, REFRESH)).await.unwrap();

    assert_eq!(session.tokens.access, FRESH_ACCESS);
    assert_eq!(session.tokens.refresh, REFRESH);
    assert_eq!(session.user.email, common::DOCTOR_EMAIL);
    assert_eq!(mock.refreshes(), 1);
}

#[tokio::test]
async fn invalid_refresh_token_ends_the_session() {
    let (client, mock) = common::test_client().await;

    let err = client
        .restore(pair(STALE_ACCESS, "revoked"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(mock.refreshes(), 1);
}

/// Signed JWT whose `exp` lies `secs` seconds from now.
fn jwt_expiring_in(secs: i64) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let claims = serde_json::json!({
        "user_id": 7,
        "exp": chrono::Utc::now().timestamp() + secs,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"upstream-only-secret"),
    )
    .unwrap()
}

#[tokio::test]
async fn expired_jwt_is_refreshed_before_the_profile_fetch() {
    let (client, mock) = common::test_client().await;

    let session = client
        .restore(pair(&jwt_expiring_in(-60), REFRESH))
        .await
        .unwrap();

    assert_eq!(session.tokens.access, FRESH_ACCESS);
    assert_eq!(mock.refreshes(), 1);
    // The only profile request is made with the refreshed token.
    assert_eq!(mock.profile_fetches(), 1);
}

#[tokio::test]
async fn rejected_token_costs_one_extra_profile_fetch() {
    let (client, mock) = common::test_client().await;

    client.restore(pair(STALE_ACCESS, REFRESH)).await.unwrap();

    assert_eq!(mock.profile_fetches(), 2);
}
