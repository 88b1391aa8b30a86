use axum::{extract::State, http::HeaderMap, Json};
use shared_types::{AppError, AuthUser, LoginRequest, LoginResponse};

use crate::auth_client::AuthApiClient;
use crate::error_convert::ValidateRequest;

// POST /api/v1/auth/login
#[tracing::instrument(skip(auth, body), fields(email = %body.email))]
pub async fn login(
    State(auth): State<AuthApiClient>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    body.validate_request()?;
    let session = auth.sign_in(&body).await?;
    Ok(Json(session))
}

// GET /api/v1/auth/me
pub async fn me(
    State(auth): State<AuthApiClient>,
    headers: HeaderMap,
) -> Result<Json<AuthUser>, AppError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;
    let user = auth.fetch_profile(token).await?;
    Ok(Json(user))
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert("authorization", HeaderValue::from_static("Basic xyz"));
        assert!(bearer_token(&headers).is_none());

        headers.insert("authorization", HeaderValue::from_static("Bearer   "));
        assert!(bearer_token(&headers).is_none());
    }
}
