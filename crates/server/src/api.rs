use dioxus::prelude::*;
use shared_types::LoginResponse;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Process-wide state for server functions. REST handlers get theirs via
/// `State` instead.
#[cfg(feature = "server")]
fn shared_state() -> &'static crate::state::AppState {
    static STATE: std::sync::OnceLock<crate::state::AppState> = std::sync::OnceLock::new();
    STATE.get_or_init(crate::state::AppState::from_config)
}

/// Forward credentials to the authentication API and return the issued
/// tokens together with the user's profile.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<LoginResponse, ServerFnError> {
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let state = shared_state();
    if !state
        .login_limiter
        .check(&crate::rate_limit::email_key(&req.email))
    {
        tracing::warn!("login rate limit exceeded");
        return Err(
            AppError::rate_limited("Too many login attempts. Please try again later.")
                .into_server_fn_error(),
        );
    }

    state
        .auth
        .sign_in(&req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Rebuild the session from tokens kept in browser storage, refreshing the
/// access token when needed.
#[cfg_attr(feature = "server", tracing::instrument(skip_all))]
#[server]
pub async fn restore_session(
    access: String,
    refresh: String,
) -> Result<LoginResponse, ServerFnError> {
    use shared_types::{AppError, TokenPair};

    if access.is_empty() && refresh.is_empty() {
        return Err(AppError::unauthorized("No stored session").into_server_fn_error());
    }

    shared_state()
        .auth
        .restore(TokenPair { access, refresh })
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Sign-out hook. The authentication API exposes no revocation call, so this
/// only records the event; the client discards its tokens itself.
#[cfg_attr(feature = "server", tracing::instrument(skip_all))]
#[server]
pub async fn logout(had_session: bool) -> Result<(), ServerFnError> {
    tracing::info!(had_session, "user signed out");
    Ok(())
}
