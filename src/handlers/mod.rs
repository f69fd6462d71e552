pub mod items;

use axum::{http::StatusCode, response::Redirect, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "database": "sqlite" })),
    )
}

/// The root path points visitors at the interactive API docs.
pub async fn docs_redirect() -> Redirect {
    Redirect::temporary("/swagger-ui")
}
