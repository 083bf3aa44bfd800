use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use modelsearch_core::{
    config::normalize_ollama_url, ServerStatus, ServerUrlResponse, StatusResponse,
};

use crate::state::AppState;

pub const OLLAMA_URL_HEADER: &str = "x-ollama-url";

pub async fn server_url(State(state): State<Arc<AppState>>) -> Json<ServerUrlResponse> {
    Json(ServerUrlResponse {
        url: state.ollama_url.clone(),
    })
}

pub async fn server_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<StatusResponse> {
    let base_url = headers
        .get(OLLAMA_URL_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(normalize_ollama_url)
        .unwrap_or_else(|| state.ollama_url.clone());

    let status = if state.status.is_running(&base_url).await {
        ServerStatus::Running
    } else {
        ServerStatus::Stopped
    };
    Json(StatusResponse { status })
}
