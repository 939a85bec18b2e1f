//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the generative model that evaluates answers
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod string;
