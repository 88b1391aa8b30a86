use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared_types::{AppError, RateLimitConfig};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Sliding window rate limit state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    inner: Arc<Mutex<RateLimitInner>>,
}

struct RateLimitInner {
    /// Map from client key -> list of attempt timestamps.
    requests: HashMap<String, Vec<Instant>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimitState {
    /// Create rate limiter allowing `max_requests` per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimitInner {
                requests: HashMap::new(),
                max_requests,
                window,
            })),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_secs(config.window_secs))
    }

    /// Record an attempt from `key`. Returns true if it is allowed.
    pub fn check(&self, key: &str) -> bool {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = Instant::now();
        let window = inner.window;
        let max = inner.max_requests;

        // Drop keys whose attempts have all aged out.
        inner
            .requests
            .retain(|_, stamps| stamps.last().is_some_and(|t| now.duration_since(*t) < window));

        let timestamps = inner.requests.entry(key.to_string()).or_default();
        timestamps.retain(|t| now.duration_since(*t) < window);

        if timestamps.len() as u32 >= max {
            return false;
        }

        timestamps.push(now);
        true
    }
}

/// Limiter key for login attempts by email.
pub fn email_key(email: &str) -> String {
    format!("email:{}", email.trim().to_lowercase())
}

/// Client identity for per-address limiting: the first `X-Forwarded-For`
/// hop, then the peer IP when the server was started with connect info,
/// then `unknown`.
pub fn client_key(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let client = forwarded
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string());

    format!("addr:{client}")
}

/// Axum middleware limiting login attempts per client address.
pub async fn login_rate_limit(
    State(state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request);

    if !state.check(&client) {
        tracing::warn!(%client, "login rate limit exceeded");
        return AppError::rate_limited("Too many login attempts. Please try again later.")
            .into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_max_then_blocks() {
        let limiter = RateLimitState::new(2, Duration::from_secs(60));
        assert!(limiter.check("a"));
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = RateLimitState::new(1, Duration::from_secs(60));
        assert!(limiter.check("a"));
        assert!(limiter.check("b"));
        assert!(!limiter.check("a"));
    }

    #[test]
    fn window_expiry_allows_again() {
        let limiter = RateLimitState::new(1, Duration::from_millis(20));
        assert!(limiter.check("a"));
        std::thread::sleep(Duration::from_millis(40));
        assert!(limiter.check("a"));
    }

    fn login_request(forwarded: Option<&str>, peer: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/api/v1/auth/login");
        if let Some(forwarded) = forwarded {
            builder = builder.header("x-forwarded-for", forwarded);
        }
        let mut request = builder.body(axum::body::Body::empty()).unwrap();
        if let Some(peer) = peer {
            let addr: SocketAddr = peer.parse().unwrap();
            request.extensions_mut().insert(ConnectInfo(addr));
        }
        request
    }

    #[test]
    fn client_key_prefers_forwarded_then_peer() {
        let both = login_request(Some("203.0.113.9, 10.0.0.1"), Some("192.0.2.4:50123"));
        assert_eq!(client_key(&both), "addr:203.0.113.9");

        let peer_only = login_request(None, Some("192.0.2.4:50123"));
        assert_eq!(client_key(&peer_only), "addr:192.0.2.4");

        let neither = login_request(Some("  "), None);
        assert_eq!(client_key(&neither), "addr:unknown");
    }

    #[test]
    fn email_key_normalizes() {
        assert_eq!(email_key("  Dr.Who@Clinic.ORG "), "email:dr.who@clinic.org");
    }
}
