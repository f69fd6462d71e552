use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::{CreateItem, Item, ItemFilters},
    AppState,
};

/// Header carrying the client version token, required on create.
pub const APP_VERSION_HEADER: &str = "x-app-version";

// ── Create ────────────────────────────────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Duplicate name, non-positive price, or missing X-App-Version header"),
        (status = 422, description = "Payload failed field validation"),
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    // The version token is required before any business rule runs.
    let client_version = headers
        .get(APP_VERSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing X-App-Version header".to_string()))?;

    let candidate = payload.validate()?;
    let item = db::create_item(&state.db, &candidate).await?;

    info!(
        id = item.id,
        name = %item.name,
        version = client_version,
        "Created item"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

// ── List ──────────────────────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/items",
    params(ItemFilters),
    responses(
        (status = 200, description = "Matching items", body = [Item]),
        (status = 422, description = "Limit out of range"),
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(filters): Query<ItemFilters>,
) -> AppResult<Json<Vec<Item>>> {
    let limit = filters.effective_limit()?;
    let items = db::fetch_items(&state.db, filters.search.as_deref(), limit).await?;

    info!(count = items.len(), limit, "Listed items");

    Ok(Json(items))
}
