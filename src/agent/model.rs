use async_trait::async_trait;
use rig::completion::Prompt;
use rig::providers::openai;
use tracing::debug;

use crate::config::{Config, trim_base_url};

/// A remote model that turns one preamble + user turn into one text reply.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, preamble: &str, input: &str) -> anyhow::Result<String>;

    /// Identifier of the remote model, for logging.
    fn model_id(&self) -> &str;
}

/// Gemini reached through Google's OpenAI-compatible chat-completions endpoint.
pub struct GeminiModel {
    client: openai::Client,
    model: String,
}

impl GeminiModel {
    pub fn new(api_key: &str, base_url: &str, model: impl Into<String>) -> Self {
        Self {
            client: openai::Client::from_url(api_key, &trim_base_url(base_url)),
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_key, &config.base_url, config.model.clone())
    }
}

#[async_trait]
impl ChatModel for GeminiModel {
    async fn complete(&self, preamble: &str, input: &str) -> anyhow::Result<String> {
        let agent = self.client.agent(&self.model).preamble(preamble).build();
        debug!("Sending completion request to {}", self.model);
        let response = agent.prompt(input.to_string()).await?;
        Ok(response)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
