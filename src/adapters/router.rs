use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    adapters::{controllers::file_controller::FileController, state::AppState},
    domain::config::server::ServerConfig,
};

pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(allowed_origins) => CorsLayer::new()
            .allow_origin(allowed_origins.clone())
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    }
}

pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/api/files",
            get(FileController::list_files).post(FileController::upload_files),
        )
        .route("/api/files/{id}", delete(FileController::delete_file))
        // Uploads are buffered whole and never size-checked.
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
