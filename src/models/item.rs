use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Minimum number of characters in an item name.
pub const NAME_MIN_CHARS: usize = 3;
/// Rows returned by the list endpoint when no limit is given.
pub const DEFAULT_LIST_LIMIT: i64 = 10;
/// Inclusive bounds accepted for the list endpoint's `limit` parameter.
pub const LIST_LIMIT_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Persisted item row. `id` and `created_at` are assigned by the store
/// exactly once, at insert time.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Price as an integer amount, strictly positive.
    pub price: i64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

/// Untrusted creation payload as received over HTTP.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItem {
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

/// Validated candidate: every field rule holds, persistence fields are not
/// yet assigned. Constructed only through [`CreateItem::validate`].
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name too short")]
    NameTooShort,
    #[error("price must be positive")]
    PriceNotPositive,
    #[error("stock cannot be negative")]
    StockNegative,
    #[error("limit must be between 1 and 100")]
    LimitOutOfRange,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    // Counted in characters, not bytes, so multibyte names are not penalized.
    if name.chars().count() < NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

fn validate_price(price: i64) -> Result<(), ValidationError> {
    if price <= 0 {
        return Err(ValidationError::PriceNotPositive);
    }
    Ok(())
}

fn validate_stock(stock: i64) -> Result<(), ValidationError> {
    if stock < 0 {
        return Err(ValidationError::StockNegative);
    }
    Ok(())
}

impl CreateItem {
    /// Run every field rule and promote the payload to a candidate.
    /// Pure: no store access, no side effects.
    pub fn validate(self) -> Result<NewItem, ValidationError> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_stock(self.stock)?;
        Ok(NewItem {
            name: self.name,
            price: self.price,
            stock: self.stock,
        })
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default, IntoParams)]
pub struct ItemFilters {
    /// Substring matched against item names.
    pub search: Option<String>,
    /// Maximum number of rows to return (1-100, default 10).
    pub limit: Option<i64>,
}

impl ItemFilters {
    /// Resolve the effective row cap, rejecting out-of-range values before
    /// they reach the store.
    pub fn effective_limit(&self) -> Result<i64, ValidationError> {
        match self.limit {
            None => Ok(DEFAULT_LIST_LIMIT),
            Some(l) if LIST_LIMIT_RANGE.contains(&l) => Ok(l),
            Some(_) => Err(ValidationError::LimitOutOfRange),
        }
    }
}
