//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write diagnostic logs to this directory instead of stderr
    pub dir: Option<PathBuf>,
    /// JSONL transcript of evaluation requests and responses
    pub transcript: Option<PathBuf>,
}
