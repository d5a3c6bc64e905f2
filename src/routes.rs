use crate::handlers::{chat_handler, root};
use crate::state::AppState;
use axum::{Router, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/chat", post(chat_handler))
}
