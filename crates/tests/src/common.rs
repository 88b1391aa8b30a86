use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use server::auth_client::AuthApiClient;
use server::rate_limit::RateLimitState;
use server::state::AppState;
use shared_types::AuthApiConfig;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const DOCTOR_EMAIL: &str = "meredith.grey@clinic.test";
pub const PASSWORD: &str = "correct-horse";
/// Signs in successfully, but the profile carries a role the app does not know.
pub const NURSE_EMAIL: &str = "nurse@clinic.test";
/// Upstream answers 429 for this account.
pub const THROTTLED_EMAIL: &str = "busy@clinic.test";
/// Upstream answers 500 for this account.
pub const BROKEN_EMAIL: &str = "broken@clinic.test";

pub const LIVE_ACCESS: &str = "live-access";
pub const STALE_ACCESS: &str = "stale-access";
pub const FRESH_ACCESS: &str = "fresh-access";
pub const REFRESH: &str = "refresh-1";

/// In-process stand-in for the external authentication API.
#[derive(Clone, Default)]
pub struct MockUpstream {
    pub refresh_calls: Arc<AtomicUsize>,
    pub login_calls: Arc<AtomicUsize>,
    pub profile_calls: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn refreshes(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn logins(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn profile_fetches(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }
}

async fn upstream_login(State(mock): State<MockUpstream>, Json(body): Json<Value>) -> Response {
    mock.login_calls.fetch_add(1, Ordering::SeqCst);
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match email {
        THROTTLED_EMAIL => StatusCode::TOO_MANY_REQUESTS.into_response(),
        BROKEN_EMAIL => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        NURSE_EMAIL if password == PASSWORD => {
            Json(json!({ "access": "nurse-access", "refresh": REFRESH })).into_response()
        }
        DOCTOR_EMAIL if password == PASSWORD => {
            Json(json!({ "access": LIVE_ACCESS, "refresh": REFRESH })).into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "No active account found with the given credentials" })),
        )
            .into_response(),
    }
}

async fn upstream_me(State(mock): State<MockUpstream>, headers: HeaderMap) -> Response {
    mock.profile_calls.fetch_add(1, Ordering::SeqCst);
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default();

    match token {
        LIVE_ACCESS | FRESH_ACCESS => Json(json!({
            "first_name": "Meredith",
            "last_name": "Grey",
            "email": DOCTOR_EMAIL,
            "role": "doctor",
        }))
        .into_response(),
        "nurse-access" => Json(json!({
            "first_name": "Carla",
            "last_name": "Espinosa",
            "email": NURSE_EMAIL,
            "role": "nurse",
        }))
        .into_response(),
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn upstream_refresh(State(mock): State<MockUpstream>, Json(body): Json<Value>) -> Response {
    mock.refresh_calls.fetch_add(1, Ordering::SeqCst);
    if body["refresh"] == REFRESH {
        Json(json!({ "access": FRESH_ACCESS })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Token is invalid" }))).into_response()
    }
}

/// Serve the mock upstream on an ephemeral port and return its `/api` base URL.
pub async fn spawn_upstream() -> (String, MockUpstream) {
    let mock = MockUpstream::default();
    let router = Router::new()
        .route("/api/auth/login/", post(upstream_login))
        .route("/api/auth/me/", get(upstream_me))
        .route("/api/auth/token/refresh/", post(upstream_refresh))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    (format!("http://{addr}/api"), mock)
}

/// Client pointed at a freshly spawned mock upstream.
pub async fn test_client() -> (AuthApiClient, MockUpstream) {
    let (base_url, mock) = spawn_upstream().await;
    let config = AuthApiConfig {
        base_url,
        timeout_secs: 5,
        ..AuthApiConfig::default()
    };
    (AuthApiClient::new(config), mock)
}

/// Full REST router backed by a mock upstream, allowing `max_login_attempts`
/// login calls per client address per minute.
pub async fn test_app(max_login_attempts: u32) -> (Router, MockUpstream) {
    let (auth, mock) = test_client().await;
    let state = AppState {
        auth,
        login_limiter: RateLimitState::new(max_login_attempts, Duration::from_secs(60)),
    };
    (server::rest::api_router(state), mock)
}

/// POST a JSON body and return (status, parsed body).
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_json_from(app, uri, body, None).await
}

/// POST a JSON body with an optional `X-Forwarded-For` client address.
pub async fn post_json_from(
    app: &Router,
    uri: &str,
    body: &Value,
    client: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(client) = client {
        builder = builder.header("x-forwarded-for", client);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    read(response).await
}

/// POST a JSON body as if it arrived on a direct connection from `peer`.
pub async fn post_json_from_peer(
    app: &Router,
    uri: &str,
    body: &Value,
    peer: &str,
) -> (StatusCode, Value) {
    let peer: SocketAddr = peer.parse().unwrap();
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .extension(ConnectInfo(peer))
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    read(response).await
}

/// GET with an optional bearer token and return (status, parsed body).
pub async fn get_with_token(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn read(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
