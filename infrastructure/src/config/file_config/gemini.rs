//! Gemini provider configuration from TOML (`[gemini]` section)

use coach_domain::Model;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GOOGLE_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Model that evaluates answers.
    pub model: String,
    /// Request timeout in seconds. No timeout when unset.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: Model::default().to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileGeminiConfig {
    /// Inline key if set, otherwise the value of `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Configured model; falls back to the default model when the name is empty.
    pub fn parse_model(&self) -> Model {
        self.model.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileGeminiConfig::default();
        assert_eq!(config.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.model, "gemini-1.5-pro-latest");
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_inline_key_wins() {
        let config = FileGeminiConfig {
            api_key: Some("inline-key".to_string()),
            api_key_env: "COACH_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("inline-key".to_string()));
    }

    #[test]
    fn test_missing_key() {
        let config = FileGeminiConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "COACH_TEST_UNSET_KEY_VAR_2".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn test_parse_model() {
        let config = FileGeminiConfig {
            model: "gemini-2.0-flash".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_model(), Model::Gemini20Flash);

        let config = FileGeminiConfig {
            model: String::new(),
            ..Default::default()
        };
        assert_eq!(config.parse_model(), Model::default());
    }
}
