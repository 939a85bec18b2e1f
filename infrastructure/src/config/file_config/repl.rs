//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while waiting for the evaluation
    pub show_progress: bool,
    /// Path to history file; a leading `~/` is expanded
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Configured history path with `~/` expanded
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.history_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path() {
        let config = FileReplConfig {
            history_file: Some("/tmp/coach/history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/coach/history.txt")));

        assert!(FileReplConfig::default().history_path().is_none());
    }

    #[test]
    fn test_history_path_expands_home() {
        let config = FileReplConfig {
            history_file: Some("~/.coach_history".to_string()),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.history_path(), Some(home.join(".coach_history")));
        }
    }
}
