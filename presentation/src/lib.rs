//! Presentation layer for interview-coach
//!
//! This crate contains the CLI definition, the interactive interview REPL,
//! console formatting and progress reporting.

pub mod cli;
pub mod interview;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use interview::repl::InterviewRepl;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
