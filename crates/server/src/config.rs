use shared_types::{AdvisorConfig, AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse config text. Unknown keys are ignored, missing ones take defaults.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load `.env` and `config.toml` once and keep the result for the life of
/// the process.
/// Only the first call has any effect.
///
/// A missing or unparseable file falls back to [`AppConfig::default`].
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        // Secrets such as GEMINI_API_KEY may come from a local .env file.
        let _ = dotenvy::dotenv();
        read_config_file()
    })
}

fn read_config_file() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = CONFIG_PATH, error = %e, "config parse failed, using defaults");
                AppConfig::default()
            });
            tracing::info!(features = ?config.features, model = %config.advisor.model, "config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Loaded feature flags, or defaults if `load_config()` hasn't run yet.
pub fn feature_flags() -> &'static FeatureFlags {
    &current().features
}

pub fn advisor_config() -> &'static AdvisorConfig {
    &current().advisor
}

fn current() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
