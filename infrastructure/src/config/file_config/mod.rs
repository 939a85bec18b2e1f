//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod interview;
mod logging;
mod repl;
mod report;

pub use gemini::FileGeminiConfig;
pub use interview::FileInterviewConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;
pub use report::FileReportConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems detected in a loaded configuration. None of them are fatal:
/// the application falls back to defaults and reports them as warnings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gemini.timeout_seconds = 0 is ignored; requests have no timeout")]
    InvalidTimeout,

    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("interview.default_domain: unknown domain '{0}'")]
    UnknownDomain(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Evaluation service settings
    pub gemini: FileGeminiConfig,
    /// Report settings
    pub report: FileReportConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
    /// Interview defaults
    pub interview: FileInterviewConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Some(0) = self.gemini.timeout_seconds {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }

        if self.gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }

        if let Some(domain) = &self.interview.default_domain
            && self.interview.parse_default_domain().is_err()
        {
            issues.push(ConfigValidationError::UnknownDomain(domain.clone()));
        }

        issues
    }
}
