use axum::extract::FromRef;

use crate::auth_client::AuthApiClient;
use crate::rate_limit::RateLimitState;

/// Shared application state passed to Axum handlers via `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth: AuthApiClient,
    pub login_limiter: RateLimitState,
}

impl AppState {
    /// State built from the loaded `config.toml`.
    pub fn from_config() -> Self {
        let config = crate::config::app_config();
        Self {
            auth: AuthApiClient::new(config.auth.clone()),
            login_limiter: RateLimitState::from_config(&config.rate_limit),
        }
    }
}
