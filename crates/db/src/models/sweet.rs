//! Sweet entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use sweetshop_core::types::{DbId, Timestamp};

/// A row from the `sweets` table.
#[derive(Debug, Clone, FromRow)]
pub struct Sweet {
    pub id: DbId,
    pub name: String,
    /// Canonical lowercase category name from the fixed set.
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A sweet row joined with its creator's username.
#[derive(Debug, Clone, FromRow)]
pub struct SweetWithCreator {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_by: DbId,
    pub created_by_username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Creator info embedded in [`SweetResponse`].
#[derive(Debug, Clone, Serialize)]
pub struct CreatorInfo {
    pub id: DbId,
    pub username: String,
}

/// External-facing representation of a sweet (camelCase wire format,
/// creator embedded as an object).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweetResponse {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_by: CreatorInfo,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SweetWithCreator> for SweetResponse {
    fn from(row: SweetWithCreator) -> Self {
        SweetResponse {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
            quantity: row.quantity,
            description: row.description,
            image: row.image,
            created_by: CreatorInfo {
                id: row.created_by,
                username: row.created_by_username,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for inserting a new sweet. `category` must already be the
/// canonical lowercase name.
#[derive(Debug, Clone)]
pub struct CreateSweet {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_by: DbId,
}

/// DTO for updating an existing sweet. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateSweet {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Composable search filter. Absent fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct SweetFilter {
    /// Free-text query, matched against name, category, and description.
    pub q: Option<String>,
    /// Exact category match (canonical lowercase).
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
}
