use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::models::ValidationError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Field or query-parameter validation failed (422).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed request outside the schema, e.g. a missing header (400).
    #[error("{0}")]
    BadRequest(String),

    /// Duplicate item name (400 — the public contract reports duplicates
    /// as a bad request, not 409).
    #[error("{0}")]
    Conflict(String),

    /// Reserved: no current route reads a single item.
    #[allow(dead_code)]
    #[error("{0}")]
    NotFound(String),

    /// Store failure (500, logged).
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                e.to_string(),
            ),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Self::Conflict(msg) => (StatusCode::BAD_REQUEST, "conflict", msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            Self::Database(e) => {
                // Log the real error, return a generic message.
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "an internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": kind, "message": message }))).into_response()
    }
}
