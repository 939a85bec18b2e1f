//! Error types for the Gemini adapter

use coach_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Generative Language API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not set (expected env var {env})")]
    MissingApiKey { env: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response contained no text: {0}")]
    EmptyResponse(String),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey { env } => GatewayError::Unauthorized(format!(
                "API key not set (expected env var {})",
                env
            )),
            // the request URL never reaches user-visible text
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.without_url().to_string())
            }
            GeminiError::Http(e) => GatewayError::RequestFailed(e.without_url().to_string()),
            GeminiError::Api { status, message } => match status {
                401 | 403 => GatewayError::Unauthorized(message),
                404 => GatewayError::ModelNotAvailable(message),
                429 => GatewayError::QuotaExceeded(message),
                _ => GatewayError::RequestFailed(format!("status {}: {}", status, message)),
            },
            GeminiError::ParseError { error, .. } => GatewayError::MalformedResponse(error),
            GeminiError::EmptyResponse(reason) => GatewayError::MalformedResponse(reason),
        }
    }
}
