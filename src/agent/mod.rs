pub mod instructions;
pub mod model;
pub mod runner;

use std::fmt;
use std::sync::Arc;

pub use model::{ChatModel, GeminiModel};
pub use runner::{RunResult, Runner};

use instructions::TEXTBOOK_INSTRUCTIONS;

/// Immutable bundle of persona and model used for every chat request.
#[derive(Clone)]
pub struct AgentDescriptor {
    pub name: String,
    pub instructions: String,
    pub model: Arc<dyn ChatModel>,
}

impl AgentDescriptor {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: Arc<dyn ChatModel>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model,
        }
    }

    /// The textbook chatbot persona served by `/chat`.
    pub fn textbook_assistant(model: Arc<dyn ChatModel>) -> Self {
        Self::new("Python Assistant", TEXTBOOK_INSTRUCTIONS, model)
    }
}

impl fmt::Debug for AgentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentDescriptor")
            .field("name", &self.name)
            .field("instructions_len", &self.instructions.len())
            .field("model", &self.model.model_id())
            .finish()
    }
}
