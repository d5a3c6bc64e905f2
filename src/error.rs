use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Custom error type for the application
#[derive(Debug)]
pub enum AppError {
    /// Failure talking to the completion API. The detail is logged, never returned.
    Upstream(anyhow::Error),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Upstream(err) = self;
        error!("Upstream completion failed: {:#}", err);

        let body = Json(ErrorResponse {
            error: "INTERNAL_SERVER_ERROR".to_string(),
            message: "Internal server error".to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Upstream(err)
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upstream_error_is_opaque() {
        let response =
            AppError::from(anyhow::anyhow!("401 Unauthorized: API key not valid")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!text.contains("API key"));
        assert!(text.contains("INTERNAL_SERVER_ERROR"));
    }
}
