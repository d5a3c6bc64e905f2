use std::sync::Arc;

use crate::agent::{AgentDescriptor, ChatModel, GeminiModel};
use crate::config::Config;

/// Read-only context shared by every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub agent: Arc<AgentDescriptor>,
}

impl AppState {
    pub fn new(agent: AgentDescriptor) -> Self {
        Self {
            agent: Arc::new(agent),
        }
    }

    /// Textbook assistant backed by the Gemini endpoint named in `config`.
    pub fn from_config(config: &Config) -> Self {
        let model: Arc<dyn ChatModel> = Arc::new(GeminiModel::from_config(config));
        Self::new(AgentDescriptor::textbook_assistant(model))
    }
}
