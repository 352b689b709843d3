//! Repository for the `roles` reference table.

use sqlx::PgPool;
use sweetshop_core::types::DbId;

use crate::models::role::Role;

/// Lookup operations for the seeded role set.
pub struct RoleRepo;

impl RoleRepo {
    /// Find a role by name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a role id to its name.
    ///
    /// Role ids always come from the `users.role_id` foreign key, so a
    /// missing row indicates a broken reference and surfaces as
    /// `RowNotFound`.
    pub async fn resolve_name(pool: &PgPool, id: DbId) -> Result<String, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM roles WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
