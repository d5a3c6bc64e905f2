use crate::agent::Runner;
use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse, RootResponse};
use crate::state::AppState;
use axum::{
    extract::{Json, State},
    response::Json as ResponseJson,
};
use tracing::{debug, info};

/// Root handler
/// Confirms the backend is reachable
pub async fn root() -> ResponseJson<RootResponse> {
    debug!("Root endpoint called");
    ResponseJson(RootResponse::connected())
}

/// Chat handler
/// Forwards the user's message to the textbook agent and returns its reply
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> AppResult<ResponseJson<ChatResponse>> {
    info!("Chat endpoint called with {} characters", payload.message.len());

    let result = Runner::run(&state.agent, &payload.message).await?;

    info!("Successfully processed chat message, returning response");
    Ok(ResponseJson(ChatResponse::new(result.final_output)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentDescriptor, ChatModel};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedModel(&'static str);

    #[async_trait]
    impl ChatModel for FixedModel {
        async fn complete(&self, _preamble: &str, _input: &str) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }

        fn model_id(&self) -> &str {
            "fixed"
        }
    }

    struct DownModel;

    #[async_trait]
    impl ChatModel for DownModel {
        async fn complete(&self, _preamble: &str, _input: &str) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("connection refused"))
        }

        fn model_id(&self) -> &str {
            "down"
        }
    }

    fn state_with(model: Arc<dyn ChatModel>) -> AppState {
        AppState::new(AgentDescriptor::textbook_assistant(model))
    }

    #[tokio::test]
    async fn test_root() {
        let ResponseJson(body) = root().await;
        assert_eq!(body.message, "Backend Connected Successfully");
    }

    #[tokio::test]
    async fn test_chat_handler_returns_model_text() {
        let state = state_with(Arc::new(FixedModel("Isaac Sim runs on the GPU")));
        let request = ChatRequest {
            message: "Why Isaac?".to_string(),
        };

        let ResponseJson(body) = chat_handler(State(state), Json(request)).await.unwrap();
        assert_eq!(body.response, "Isaac Sim runs on the GPU");
    }

    #[tokio::test]
    async fn test_chat_handler_upstream_failure() {
        let state = state_with(Arc::new(DownModel));
        let request = ChatRequest {
            message: "hello".to_string(),
        };

        let result = chat_handler(State(state), Json(request)).await;
        assert!(result.is_err());
    }
}
