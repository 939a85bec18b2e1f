//! Configuration file loading for interview-coach
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COACH_`-prefixed environment variables (`COACH_GEMINI__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./interview-coach.toml` or `./.interview-coach.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/interview-coach/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileInterviewConfig, FileLoggingConfig,
    FileReplConfig, FileReportConfig,
};
pub use loader::ConfigLoader;
