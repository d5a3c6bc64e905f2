use serde::{Deserialize, Serialize};

/// Request payload for the chat endpoint
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response payload for the chat endpoint
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Response payload for the root connectivity check
#[derive(Debug, Deserialize, Serialize)]
pub struct RootResponse {
    pub message: String,
}

impl RootResponse {
    pub fn connected() -> Self {
        Self {
            message: "Backend Connected Successfully".to_string(),
        }
    }
}

impl ChatResponse {
    pub fn new(response: String) -> Self {
        Self { response }
    }
}
