//! Domain layer for interview-coach
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Interview Domain
//!
//! A named interview track (e.g. *Marketing*) with a fixed, ordered list of
//! questions. The catalog is static and validated once at startup.
//!
//! ## Interview Session
//!
//! The state machine of one user's progress through a domain:
//!
//! - **AwaitingAnswer**: the current question is waiting for an answer
//! - **AwaitingAdvance**: the answer was evaluated, the user may move on
//! - **Completed**: every question is answered, only the report remains
//!
//! ## Report
//!
//! The finished session compiled into a [`ReportDocument`], with every
//! free-text field passed through [`sanitize`].

pub mod core;
pub mod interview;
pub mod prompt;
pub mod report;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    model::Model,
    string::{single_line, truncate},
};
pub use interview::{
    answer::{Answer, AnswerRecord},
    catalog::InterviewDomain,
    session::{InterviewSession, InterviewState, SessionError},
    view::SessionView,
};
pub use prompt::PromptTemplate;
pub use report::{
    document::{
        CANDIDATE_PLACEHOLDER, CoverPage, REPORT_MIME_TYPE, REPORT_TITLE, ReportBlock,
        ReportDocument, format_report_date, report_filename,
    },
    sanitize::sanitize,
};
