mod adapters;
mod application;
mod domain;

use adapters::{
    router::{cors_layer, create_router},
    state::AppState,
};
use chrono::Utc;
use domain::{config::server::ServerConfig, models::registry::Registry};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration from the environment
    let config = ServerConfig::from_env().expect("ERROR: invalid server configuration");

    // Seed the in-memory registry and build routes
    let app_state = AppState::in_memory(Registry::seeded(Utc::now()));
    let router = create_router(app_state, cors_layer(&config));

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .expect("Failed to bind to port");

    tracing::info!("Mock API running at http://localhost:{}", config.port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
