//! Gemini adapter
//!
//! Implements LlmGateway for the Google Generative Language REST API.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
