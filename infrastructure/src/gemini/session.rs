//! Gemini session management.
//!
//! Provides [`GeminiSession`] which implements [`LlmSession`] by issuing one
//! `generateContent` call per prompt. There is no retry; failures are
//! surfaced to the caller as they happen.

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::gateway::GeminiEndpoint;
use crate::gemini::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use coach_application::ports::llm_gateway::{GatewayError, LlmSession};
use coach_domain::{Model, truncate};
use std::sync::Arc;
use tracing::{debug, warn};

const MAX_RAW_IN_ERROR: usize = 500;
const API_KEY_HEADER: &str = "x-goog-api-key";

/// A stateless conversation with one Gemini model.
pub struct GeminiSession {
    endpoint: Arc<GeminiEndpoint>,
    model: Model,
}

impl GeminiSession {
    pub(crate) fn new(endpoint: Arc<GeminiEndpoint>, model: Model) -> Self {
        Self { endpoint, model }
    }

    /// Send one prompt and return the text of the first candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key =
            self.endpoint
                .api_key
                .as_deref()
                .ok_or_else(|| GeminiError::MissingApiKey {
                    env: self.endpoint.api_key_env.clone(),
                })?;

        let url = self.endpoint.generate_url(&self.model);
        debug!("POST {} ({} prompt chars)", url, prompt.chars().count());

        let response = self
            .endpoint
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Gemini API returned {}: {}", status, message);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::ParseError {
                error: e.to_string(),
                raw: truncate(&body, MAX_RAW_IN_ERROR),
            })?;

        parsed
            .text()
            .ok_or_else(|| GeminiError::EmptyResponse(parsed.missing_text_reason()))
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        self.generate(content).await.map_err(GatewayError::from)
    }
}
