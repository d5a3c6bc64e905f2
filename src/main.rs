use textbook_chat_svc::app::{create_app, init_tracing};
use textbook_chat_svc::config::Config;
use textbook_chat_svc::state::AppState;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the variables may come from the real environment.
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting textbook chat service...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("Configuration loaded: {:?}", config);

    let app = create_app(AppState::from_config(&config));

    let listener = match tokio::net::TcpListener::bind(&config.bind_address()).await {
        Ok(listener) => {
            info!("Server running on {}", config.server_url());
            info!("Connectivity check: GET /");
            info!("Chat endpoint: POST /chat");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    info!("Server starting...");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    } else {
        info!("Server shutdown gracefully");
    }
}
