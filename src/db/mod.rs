use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::*;

/// Create the items table if it does not exist yet. Runs once at startup.
///
/// `name` carries a UNIQUE constraint so two concurrent creates that both
/// pass the existence check cannot persist the same name twice.
pub async fn create_tables(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT    NOT NULL UNIQUE,
            price      INTEGER NOT NULL,
            stock      INTEGER NOT NULL,
            created_at TEXT    NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create items table")?;

    Ok(())
}

// ── Items ─────────────────────────────────────────────────────────────────────

/// Exact, case-sensitive lookup by name. Generic over the executor so it
/// runs against the pool or inside an open transaction.
pub async fn find_item_by_name<'e, E>(executor: E, name: &str) -> AppResult<Option<Item>>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let item = sqlx::query_as::<_, Item>(
        "SELECT id, name, price, stock, created_at FROM items WHERE name = $1",
    )
    .bind(name)
    .fetch_optional(executor)
    .await?;

    Ok(item)
}

/// Insert a validated candidate, assigning `id` and `created_at`.
///
/// The duplicate check and the insert share one transaction; it commits on
/// success and rolls back on drop for every error path.
pub async fn create_item(pool: &SqlitePool, candidate: &NewItem) -> AppResult<Item> {
    let mut tx = pool.begin().await?;

    let existing = find_item_by_name(&mut *tx, &candidate.name).await?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "Item with name '{}' already exists",
            candidate.name
        )));
    }

    // A non-positive price must never reach the table, even if a caller
    // bypasses payload validation.
    if candidate.price <= 0 {
        return Err(AppError::BadRequest(
            "Price must be greater than 0".to_string(),
        ));
    }

    let item = sqlx::query_as::<_, Item>(
        r#"
        INSERT INTO items (name, price, stock, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, price, stock, created_at
        "#,
    )
    .bind(&candidate.name)
    .bind(candidate.price)
    .bind(candidate.stock)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        // Another writer inserted the same name after our check.
        if e.as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation())
        {
            return AppError::Conflict(format!(
                "Item with name '{}' already exists",
                candidate.name
            ));
        }
        AppError::from(e)
    })?;

    tx.commit().await?;

    Ok(item)
}

/// Fetch up to `limit` items, optionally restricted to names containing
/// `search`. Order is whatever the store returns.
pub async fn fetch_items(
    pool: &SqlitePool,
    search: Option<&str>,
    limit: i64,
) -> AppResult<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, name, price, stock, created_at
        FROM items
        WHERE ($1 IS NULL OR name LIKE '%' || $1 || '%')
        LIMIT $2
        "#,
    )
    .bind(search)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(items)
}
