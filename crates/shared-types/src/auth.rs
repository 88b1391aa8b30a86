use serde::{Deserialize, Serialize};

use crate::Role;

/// The signed-in user held in the client's authentication context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    /// "First Last", or the email when both names are blank.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .collect();
        let initials = if initials.is_empty() {
            self.email.chars().next().map(String::from).unwrap_or_default()
        } else {
            initials
        };
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials.to_uppercase()
        }
    }
}

/// Credentials posted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Access/refresh token pair issued by the authentication API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Result of a successful sign-in or session restore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub tokens: TokenPair,
    pub user: AuthUser,
}

/// Body of a token refresh call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Token refresh reply. Upstreams that do not rotate refresh tokens omit it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}
