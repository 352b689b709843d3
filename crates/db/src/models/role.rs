//! Role reference data.

use sqlx::FromRow;
use sweetshop_core::types::DbId;

/// A row from the `roles` table (seeded by migration, never mutated).
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: DbId,
    pub name: String,
}
