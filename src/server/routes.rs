//! HTTP route handlers for the station API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::services::ServeDir;
use tracing::error;
use uuid::Uuid;

use super::state::AppState;
use super::ws::ws_upgrade;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ws", get(ws_upgrade))
        .route("/voice/{id}", get(voice_clip))
        .nest_service("/", ServeDir::new("static"))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "airwave-agent",
        "version": env!("CARGO_PKG_VERSION"),
        "ready": state.engine.state().is_ready(),
    }))
}

/// Serve a synthesized announcement by query id.
///
/// A missing or unreadable artifact is a server-side failure: the id was
/// handed out by us, so the file should exist.
async fn voice_clip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let audio = state.speech_cache.read(id).await.map_err(|err| {
        error!("error serving audio for {id}: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error serving audio".to_string(),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio))
}
