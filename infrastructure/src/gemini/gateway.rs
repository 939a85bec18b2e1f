//! Gemini LLM Gateway implementation

use crate::config::FileGeminiConfig;
use crate::gemini::error::Result;
use crate::gemini::session::GeminiSession;
use async_trait::async_trait;
use coach_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use coach_domain::Model;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Connection details shared by every session of one gateway
pub(crate) struct GeminiEndpoint {
    pub(crate) client: Client,
    base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) api_key_env: String,
}

impl GeminiEndpoint {
    /// `{base_url}/v1beta/models/{model}:generateContent`
    pub(crate) fn generate_url(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model.resource_name()
        )
    }
}

/// LLM Gateway implementation for the Google Generative Language API
pub struct GeminiLlmGateway {
    endpoint: Arc<GeminiEndpoint>,
}

impl GeminiLlmGateway {
    /// Create a gateway from the `[gemini]` configuration section.
    ///
    /// A missing API key is not an error here; it is reported by the first
    /// evaluation request. A zero `timeout_seconds` means no timeout.
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self> {
        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            info!(
                "No Gemini API key found (set {} or gemini.api_key)",
                config.api_key_env
            );
        }
        let timeout = match config.timeout_seconds {
            Some(0) => {
                warn!("gemini.timeout_seconds = 0 ignored; requests have no timeout");
                None
            }
            other => other.map(Duration::from_secs),
        };
        Self::new(&config.base_url, api_key, &config.api_key_env, timeout)
    }

    /// Create a gateway against an explicit base URL
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        api_key_env: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("GeminiLlmGateway initialized ({})", base_url);

        Ok(Self {
            endpoint: Arc::new(GeminiEndpoint {
                client,
                base_url: base_url.to_string(),
                api_key,
                api_key_env: api_key_env.to_string(),
            }),
        })
    }

    /// Whether an API key was resolved
    pub fn has_api_key(&self) -> bool {
        self.endpoint.api_key.is_some()
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(
        &self,
        model: &Model,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GeminiSession::new(
            Arc::clone(&self.endpoint),
            model.clone(),
        )))
    }

    async fn available_models(&self) -> std::result::Result<Vec<Model>, GatewayError> {
        Ok(Model::known_models())
    }
}
