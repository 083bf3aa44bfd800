use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use modelsearch_core::{SearchRequest, SearchResponse};

use crate::error::AppError;
use crate::services;
use crate::state::AppState;

pub async fn search_models(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let models = services::library::search(state.library.as_ref(), &req.keyword).await?;
    Ok(Json(SearchResponse::new(models)))
}
