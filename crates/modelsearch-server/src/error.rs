use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Upstream(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    status: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "error", msg),
        };
        (
            code,
            Json(ErrorResponse {
                error: message,
                status,
            }),
        )
            .into_response()
    }
}
