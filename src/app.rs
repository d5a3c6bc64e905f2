use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::routes::create_routes;
use crate::state::AppState;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "textbook_chat_svc=info,tower_http=debug,axum::rejection=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    info!("Initializing application router for agent {:?}", state.agent);

    // Any origin, method and header, with credentials. Development only.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .merge(create_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
