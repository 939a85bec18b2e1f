//! Report configuration from TOML (`[report]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw report configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportConfig {
    /// Image placed on the cover page when the file exists
    pub logo_path: PathBuf,
    /// Directory the report is saved to
    pub output_dir: PathBuf,
}

impl Default for FileReportConfig {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from("logo.png"),
            output_dir: PathBuf::from("."),
        }
    }
}
