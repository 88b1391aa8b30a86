//! Browser-side session handling: token storage, login completion, session
//! restore on page load and sign-out.

use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind, AuthUser, LoginResponse, TokenPair};
use std::collections::HashMap;

use crate::auth::{use_auth, AuthState};
use crate::routes::Route;

/// `localStorage` key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// `localStorage` key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub const LOGIN_FAILED_NOTICE: &str =
    "Login failed. Please check your credentials and try again.";

/// Somewhere to keep the token pair between page loads.
pub trait TokenStore {
    fn save(&self, tokens: &TokenPair);
    fn clear(&self);
}

/// Token store backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn save(&self, tokens: &TokenPair) {
        document::eval(&save_script(tokens));
    }

    fn clear(&self) {
        document::eval(&clear_script());
    }
}

/// JS string literal for `value`, quotes and escapes included.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn save_script(tokens: &TokenPair) -> String {
    format!(
        "localStorage.setItem({}, {}); localStorage.setItem({}, {});",
        js_string(ACCESS_TOKEN_KEY),
        js_string(&tokens.access),
        js_string(REFRESH_TOKEN_KEY),
        js_string(&tokens.refresh),
    )
}

fn clear_script() -> String {
    format!(
        "localStorage.removeItem({}); localStorage.removeItem({});",
        js_string(ACCESS_TOKEN_KEY),
        js_string(REFRESH_TOKEN_KEY),
    )
}

/// Read the stored token pair. `None` when nothing is stored or storage is
/// unavailable.
pub async fn load_tokens() -> Option<TokenPair> {
    let script = format!(
        "return {{ access: localStorage.getItem({}) || \"\", refresh: localStorage.getItem({}) || \"\" }};",
        js_string(ACCESS_TOKEN_KEY),
        js_string(REFRESH_TOKEN_KEY),
    );
    match document::eval(&script).join::<TokenPair>().await {
        Ok(tokens) if tokens.access.is_empty() && tokens.refresh.is_empty() => None,
        Ok(tokens) => Some(tokens),
        Err(e) => {
            tracing::warn!("could not read stored tokens: {e}");
            None
        }
    }
}

/// What the login page should do after the login call returns.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Navigate {
        user: AuthUser,
        destination: String,
    },
    Failed {
        notice: String,
        field_errors: HashMap<String, String>,
    },
}

/// Persist the tokens of a successful login, or turn a failure into the
/// notice shown to the user. Nothing is stored on failure.
pub fn complete_login(
    result: Result<LoginResponse, ServerFnError>,
    store: &impl TokenStore,
) -> LoginOutcome {
    match result {
        Ok(session) => {
            store.save(&session.tokens);
            let destination = session.user.role.dashboard_path();
            tracing::info!(role = %session.user.role, "login succeeded");
            LoginOutcome::Navigate {
                user: session.user,
                destination,
            }
        }
        Err(e) => {
            let raw = e.to_string();
            tracing::error!("login failed: {raw}");

            let parsed = AppError::from_server_error(&raw);
            let notice = match &parsed {
                Some(err) if err.kind == AppErrorKind::RateLimited => err.message.clone(),
                _ => LOGIN_FAILED_NOTICE.to_string(),
            };
            LoginOutcome::Failed {
                notice,
                field_errors: parsed.map(|err| err.field_errors).unwrap_or_default(),
            }
        }
    }
}

/// Rebuild the session from stored tokens once the app is mounted in the
/// browser. Marks restoration finished whatever the outcome.
#[component]
pub fn SessionRestorer() -> Element {
    let auth = use_auth();

    use_effect(move || {
        spawn(restore(auth));
    });

    rsx! {}
}

async fn restore(mut auth: AuthState) {
    let store = BrowserTokenStore;

    if let Some(tokens) = load_tokens().await {
        let result = server::api::restore_session(tokens.access, tokens.refresh).await;
        if let RestoreOutcome::SignedIn(user) =
            apply_restore(result, auth.is_authenticated(), &store)
        {
            auth.set_user(user);
        }
    }

    auth.mark_restored();
}

/// What a finished session restore did.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    SignedIn(AuthUser),
    SignedOut,
    /// Someone signed in while the restore was in flight; their session wins
    /// and storage is left alone.
    Superseded,
}

/// Apply the result of `restore_session` to token storage.
pub fn apply_restore(
    result: Result<LoginResponse, ServerFnError>,
    already_signed_in: bool,
    store: &impl TokenStore,
) -> RestoreOutcome {
    if already_signed_in {
        tracing::debug!("session restore superseded by a fresh login");
        return RestoreOutcome::Superseded;
    }

    match result {
        Ok(session) => {
            store.save(&session.tokens);
            tracing::debug!(role = %session.user.role, "session restored");
            RestoreOutcome::SignedIn(session.user)
        }
        Err(e) => {
            tracing::warn!("stored session rejected: {e}");
            store.clear();
            RestoreOutcome::SignedOut
        }
    }
}

/// Run `fut` outside any component scope so navigating away does not cancel it.
fn run_detached(fut: impl std::future::Future<Output = ()> + 'static) {
    let _ = spawn_forever(fut);
}

/// Forget the current user everywhere and return to the login page.
pub fn sign_out(mut auth: AuthState) {
    let had_session = auth.is_authenticated();
    auth.clear_auth();
    BrowserTokenStore.clear();
    run_detached(async move {
        if let Err(e) = server::api::logout(had_session).await {
            tracing::warn!("logout call failed: {e}");
        }
    });
    navigator().push(Route::Login {});
}
