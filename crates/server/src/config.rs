use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, apply environment overrides and store the result in
/// the global `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, every section falls back to its
/// defaults.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!("{CONFIG_PATH} not found ({e}), using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        tracing::info!(
            auth_api = %config.auth.base_url,
            telemetry = config.features.telemetry,
            "configuration loaded"
        );
        config
    });
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::error!("failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// `AUTH_API_URL` replaces the configured upstream base URL.
fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("AUTH_API_URL").filter(|v| !v.trim().is_empty()) {
        config.auth.base_url = url;
    }
}

/// The loaded configuration, or defaults if `load_config()` hasn't run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        assert_eq!(parse_config("this is [not toml"), AppConfig::default());
    }

    #[test]
    fn env_override_replaces_base_url() {
        let mut config = parse_config("[auth]\nbase_url = \"http://from-file\"");
        apply_env_overrides(&mut config, |key| {
            (key == "AUTH_API_URL").then(|| "http://from-env".to_string())
        });
        assert_eq!(config.auth.base_url, "http://from-env");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let mut config = parse_config("[auth]\nbase_url = \"http://from-file\"");
        apply_env_overrides(&mut config, |_| Some("  ".to_string()));
        assert_eq!(config.auth.base_url, "http://from-file");
    }
}
