pub mod auth;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the REST router: health plus the JSON auth proxy for non-Dioxus clients.
pub fn rest_router(state: AppState) -> Router<AppState> {
    let login = Router::new()
        .route("/api/v1/auth/login", post(auth::login))
        .route_layer(middleware::from_fn_with_state(
            state.login_limiter.clone(),
            crate::rate_limit::login_rate_limit,
        ));

    Router::new()
        .route("/health", get(crate::health::health_check))
        .route("/api/v1/auth/me", get(auth::me))
        .merge(login)
}

/// Fully-stated router, ready to serve or to merge into the Dioxus router.
pub fn api_router(state: AppState) -> Router {
    rest_router(state.clone()).with_state(state)
}
