//! Application layer for interview-coach
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{EvaluationProgress, NoProgress},
    report_renderer::{RenderError, ReportRenderer},
};
pub use use_cases::generate_report::{
    GenerateReportError, GenerateReportUseCase, GeneratedReport,
};
pub use use_cases::run_interview::{InterviewController, SubmitError};
