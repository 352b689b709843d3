//! Response body types for API handlers.
//!
//! The wire format is camelCase and mirrors the shapes in the external
//! interface table: list responses carry a `pagination` block, mutation
//! responses carry a `message` plus the affected sweet.

use serde::Serialize;
use sweetshop_db::models::sweet::SweetResponse;

/// Simple `{"message": ...}` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Pagination block for list responses.
#[derive(Debug, Serialize)]
pub struct Pagination {
    /// Current (1-based) page.
    pub current: i64,
    /// Total page count: `ceil(total / limit)`.
    pub pages: i64,
    /// Total number of items across all pages.
    pub total: i64,
}

/// Body of `GET /api/sweets`.
#[derive(Debug, Serialize)]
pub struct ListSweetsResponse {
    pub sweets: Vec<SweetResponse>,
    pub pagination: Pagination,
}

/// Body of `GET /api/sweets/search`.
#[derive(Debug, Serialize)]
pub struct SearchSweetsResponse {
    pub sweets: Vec<SweetResponse>,
    pub count: usize,
}

/// Body of `GET /api/sweets/categories/list`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: &'static [&'static str],
}

/// Body of create/update responses.
#[derive(Debug, Serialize)]
pub struct SweetMutationResponse {
    pub message: String,
    pub sweet: SweetResponse,
}

/// Body of `POST /api/sweets/{id}/purchase`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub message: String,
    pub sweet: SweetResponse,
    pub purchased_quantity: i64,
    pub remaining_stock: i64,
}

/// Body of `POST /api/sweets/{id}/restock`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockResponse {
    pub message: String,
    pub sweet: SweetResponse,
    pub restocked_quantity: i64,
    pub new_stock: i64,
}
