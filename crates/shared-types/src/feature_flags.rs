use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Calls out to the text-generation service for tips, chat and reports.
    #[serde(default)]
    pub ai_advisor: bool,
    #[serde(default)]
    pub telemetry: bool,
}

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_VERIFICATION_DELAY_MS: u64 = 2000;
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a supportive academic mentoring assistant \
for university students and their mentors. Keep advice accurate, respectful and practical, \
and note that it does not replace official university guidance.";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_verification_delay_ms() -> u64 {
    DEFAULT_VERIFICATION_DELAY_MS
}

fn default_system_instruction() -> String {
    DEFAULT_SYSTEM_INSTRUCTION.to_string()
}

/// Settings for the text-generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Pause between generating a career report and handing it to the mentor.
    #[serde(default = "default_verification_delay_ms")]
    pub verification_delay_ms: u64,
    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            verification_delay_ms: default_verification_delay_ms(),
            system_instruction: default_system_instruction(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.ai_advisor);
        assert!(!flags.telemetry);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert_eq!(config.advisor.model, "gemini-2.5-flash");
        assert_eq!(config.advisor.verification_delay_ms, 2000);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            ai_advisor = true

            [advisor]
            verification_delay_ms = 0
            "#,
        )
        .unwrap();
        assert!(config.features.ai_advisor);
        assert!(!config.features.telemetry);
        assert_eq!(config.advisor.verification_delay_ms, 0);
        assert_eq!(config.advisor.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.advisor.system_instruction, DEFAULT_SYSTEM_INSTRUCTION);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            ai_advisor = true
            telemetry = true

            [advisor]
            model = "gemini-2.0-pro"
            base_url = "http://127.0.0.1:9000"
            verification_delay_ms = 500
            system_instruction = "Be brief."
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
        assert_eq!(config.advisor.model, "gemini-2.0-pro");
        assert_eq!(config.advisor.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.advisor.system_instruction, "Be brief.");
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
