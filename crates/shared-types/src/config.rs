use serde::{Deserialize, Serialize};

/// Feature flags controlling optional integrations.
///
/// Loaded from `config.toml` at server startup and read only on the
/// server. Every field defaults to `false`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// Location of the external authentication API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub profile_path: String,
    pub refresh_path: String,
    pub timeout_secs: u64,
}

impl Default for AuthApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            login_path: "/auth/login/".to_string(),
            profile_path: "/auth/me/".to_string(),
            refresh_path: "/auth/token/refresh/".to_string(),
            timeout_secs: 10,
        }
    }
}

impl AuthApiConfig {
    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn login_url(&self) -> String {
        self.join(&self.login_path)
    }

    pub fn profile_url(&self) -> String {
        self.join(&self.profile_path)
    }

    pub fn refresh_url(&self) -> String {
        self.join(&self.refresh_path)
    }
}

/// Sliding-window limit applied to login attempts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_attempts: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            window_secs: 60,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub auth: AuthApiConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}
