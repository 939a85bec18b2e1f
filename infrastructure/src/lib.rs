//! Infrastructure layer for interview-coach
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileInterviewConfig,
    FileLoggingConfig, FileReplConfig, FileReportConfig,
};
pub use gemini::{
    error::{GeminiError, Result},
    gateway::GeminiLlmGateway,
    session::GeminiSession,
};
pub use logging::JsonlConversationLogger;
pub use report::PdfReportRenderer;
