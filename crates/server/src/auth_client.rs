//! HTTP client for the external authentication API.
//!
//! CareDesk owns no credentials: login, profile lookup and token refresh are
//! all forwarded to the upstream configured under `[auth]` in `config.toml`.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shared_types::{
    AppError, AuthApiConfig, AuthUser, LoginRequest, LoginResponse, RefreshRequest,
    RefreshResponse, TokenPair,
};
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

/// Seconds before `exp` at which an access token is already treated as stale.
const EXPIRY_LEEWAY_SECS: i64 = 30;

#[derive(Clone, Debug)]
pub struct AuthApiClient {
    http: reqwest::Client,
    config: AuthApiConfig,
}

impl AuthApiClient {
    pub fn new(config: AuthApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("failed to build HTTP client ({e}), using defaults");
                reqwest::Client::new()
            });
        Self { http, config }
    }

    /// Client for the globally loaded configuration.
    pub fn from_config() -> Self {
        Self::new(crate::config::app_config().auth.clone())
    }

    pub fn config(&self) -> &AuthApiConfig {
        &self.config
    }

    /// Exchange credentials for a token pair.
    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn login(&self, req: &LoginRequest) -> Result<TokenPair, AppError> {
        let resp = self
            .http
            .post(self.config.login_url())
            .json(req)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        match resp.status() {
            s if s.is_success() => read_json("login", resp).await,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::info!(status = %resp.status(), "upstream rejected credentials");
                Err(AppError::unauthorized("Invalid email or password"))
            }
            s => Err(unexpected_status("login", s)),
        }
    }

    /// Look up the profile of the token's owner.
    #[tracing::instrument(skip_all)]
    pub async fn fetch_profile(&self, access: &str) -> Result<AuthUser, AppError> {
        let resp = self
            .http
            .get(self.config.profile_url())
            .bearer_auth(access)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        match resp.status() {
            s if s.is_success() => read_json::<AuthUser>("profile", resp).await,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AppError::unauthorized("Session expired, please sign in again"))
            }
            s => Err(unexpected_status("profile", s)),
        }
    }

    /// Obtain a fresh access token. Keeps the old refresh token when the
    /// upstream does not rotate it.
    #[tracing::instrument(skip_all)]
    pub async fn refresh(&self, refresh: &str) -> Result<TokenPair, AppError> {
        let body = RefreshRequest {
            refresh: refresh.to_string(),
        };
        let resp = self
            .http
            .post(self.config.refresh_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        match resp.status() {
            s if s.is_success() => {
                let refreshed: RefreshResponse = read_json("refresh", resp).await?;
                Ok(TokenPair {
                    access: refreshed.access,
                    refresh: refreshed.refresh.unwrap_or(body.refresh),
                })
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AppError::unauthorized("Session expired, please sign in again"))
            }
            s => Err(unexpected_status("refresh", s)),
        }
    }

    /// Login followed by the profile lookup the dashboard needs.
    pub async fn sign_in(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        let tokens = self.login(req).await?;
        let user = self.fetch_profile(&tokens.access).await?;
        tracing::info!(role = %user.role, "user signed in");
        Ok(LoginResponse { tokens, user })
    }

    /// Rebuild a session from stored tokens.
    ///
    /// Refreshes up front when the access token is known to be expired, and
    /// once more if the upstream rejects a token that looked live.
    #[tracing::instrument(skip_all)]
    pub async fn restore(&self, tokens: TokenPair) -> Result<LoginResponse, AppError> {
        let mut tokens = tokens;
        let mut refreshed = false;
        if crate::token::access_token_expired(&tokens.access, EXPIRY_LEEWAY_SECS) {
            tokens = self.refresh(&tokens.refresh).await?;
            refreshed = true;
        }

        match self.fetch_profile(&tokens.access).await {
            Ok(user) => Ok(LoginResponse { tokens, user }),
            Err(e) if e.kind == shared_types::AppErrorKind::Unauthorized && !refreshed => {
                tracing::debug!("access token rejected, refreshing once");
                let tokens = self.refresh(&tokens.refresh).await?;
                let user = self.fetch_profile(&tokens.access).await?;
                Ok(LoginResponse { tokens, user })
            }
            Err(e) => Err(e),
        }
    }
}

async fn read_json<T: DeserializeOwned>(
    call: &str,
    resp: reqwest::Response,
) -> Result<T, AppError> {
    let body = resp.text().await.map_err(|e| e.into_app_error())?;
    serde_json::from_str(&body).map_err(|e| malformed(call, e))
}

fn malformed(call: &str, err: serde_json::Error) -> AppError {
    tracing::error!(call, "unreadable auth API response: {err}");
    if err.to_string().contains("unsupported role") {
        AppError::upstream("Authentication service returned an unsupported role")
    } else {
        AppError::upstream("Authentication service returned an invalid response")
    }
}

fn unexpected_status(call: &str, status: StatusCode) -> AppError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return AppError::rate_limited("Too many login attempts. Please try again later.");
    }
    tracing::error!(call, %status, "unexpected auth API status");
    AppError::upstream(format!("Authentication service error ({})", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn too_many_requests_maps_to_rate_limited() {
        let err = unexpected_status("login", StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.kind, AppErrorKind::RateLimited);
    }

    #[test]
    fn unknown_role_in_profile_is_upstream_error() {
        let err = serde_json::from_str::<AuthUser>(
            r#"{"first_name":"A","last_name":"B","email":"a@b.c","role":"nurse"}"#,
        )
        .unwrap_err();
        let app_err = malformed("profile", err);
        assert_eq!(app_err.kind, AppErrorKind::Upstream);
        assert!(app_err.message.contains("unsupported role"));
    }

    #[test]
    fn missing_token_field_is_upstream_error() {
        let err = serde_json::from_str::<TokenPair>(r#"{"access":"a"}"#).unwrap_err();
        assert_eq!(malformed("login", err).kind, AppErrorKind::Upstream);
    }

    #[test]
    fn server_error_maps_to_upstream() {
        let err = unexpected_status("profile", StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.kind, AppErrorKind::Upstream);
        assert!(err.message.contains("503"));
    }
}
