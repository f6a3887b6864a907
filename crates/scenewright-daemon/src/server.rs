//! Web server setup and routing

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::api;
use crate::state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    // Hand-edited buffers can be far larger than axum's default body limit
    let buffer_limit = DefaultBodyLimit::max(state.config.web.max_buffer_bytes);

    Router::new()
        .route("/", get(api::index))
        .route("/api/state", get(api::get_state))
        .route("/api/draft", patch(api::update_draft))
        .route("/api/settings", patch(api::update_settings))
        .route("/api/entities", get(api::list_entities).post(api::add_entity))
        .route("/api/generate", post(api::generate))
        .route(
            "/api/buffer",
            get(api::get_buffer)
                .put(api::put_buffer)
                .layer(buffer_limit),
        )
        .route("/api/download", get(api::download))
        .route("/api/export", post(api::export_to_dir))
        .route("/api/reset", post(api::reset))
        .route("/api/config", get(api::get_config))
        // Additional static assets
        .fallback_service(ServeDir::new(&state.config.web.static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serve the editor until the process is stopped
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let bind = state.config.daemon.bind.clone();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(address = %bind, "Serving scene editor");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
