//! REST API handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use scenewright_core::{DraftField, SettingField};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::state::AppState;

/// API error response
#[derive(Serialize)]
struct ApiError {
    error: String,
}

impl ApiError {
    fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Editor page served at the root
const INDEX_HTML: &str = include_str!("../web/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Full editor snapshot used by the page to fill its form
pub async fn get_state(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let editor = state.editor.read().await;
    Json(editor.snapshot())
}

/// Update one shape draft field
pub async fn update_draft(
    State(state): State<Arc<AppState>>,
    Json(field): Json<DraftField>,
) -> impl IntoResponse {
    let mut editor = state.editor.write().await;
    editor.set_draft_field(field);
    Json(editor.draft().clone())
}

/// Update one scene setting
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(field): Json<SettingField>,
) -> impl IntoResponse {
    let mut editor = state.editor.write().await;
    editor.set_setting(field);
    Json(editor.settings().clone())
}

/// List committed entities
pub async fn list_entities(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let editor = state.editor.read().await;
    Json(editor.entities().clone())
}

/// Commit the current draft as a new entity
pub async fn add_entity(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut editor = state.editor.write().await;
    let entity = editor.add_entity().clone();
    (StatusCode::CREATED, Json(entity))
}

/// Render the scene into the buffer and return it
pub async fn generate(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut editor = state.editor.write().await;
    Html(editor.generate().to_string())
}

/// Current buffer contents as plain text
pub async fn get_buffer(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let editor = state.editor.read().await;
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        editor.buffer().to_string(),
    )
}

/// Replace the buffer with hand-edited text
pub async fn put_buffer(State(state): State<Arc<AppState>>, body: String) -> impl IntoResponse {
    let mut editor = state.editor.write().await;
    editor.set_buffer(body);
    StatusCode::NO_CONTENT
}

/// Send the buffer as a file download
pub async fn download(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let export = state.editor.read().await.download();
    (
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, export.content_disposition()),
        ],
        export.content,
    )
}

/// Write the buffer into the configured export directory
pub async fn export_to_dir(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(dir) = state.config.export.dir.as_ref() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiError::new("Server-side export is not configured")),
        )
            .into_response();
    };

    let export = state.editor.read().await.download();
    match export.write_to_dir(dir) {
        Ok(path) => Json(serde_json::json!({
            "status": "exported",
            "path": path.display().to_string(),
            "bytes": export.content.len()
        }))
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Scene export failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(format!("Failed to export scene: {}", e))),
            )
                .into_response()
        }
    }
}

/// Clear entities and restore every field to its default
pub async fn reset(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("Reset requested");
    let mut editor = state.editor.write().await;
    editor.reset_all();
    Json(editor.snapshot())
}

/// Get current configuration
pub async fn get_config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.config.clone())
}
