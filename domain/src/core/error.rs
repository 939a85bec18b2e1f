//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown interview domain: {0}")]
    UnknownDomain(String),

    #[error("Interview domain '{0}' has no questions")]
    EmptyDomain(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}
