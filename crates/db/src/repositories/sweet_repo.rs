//! Repository for the `sweets` table.
//!
//! Stock mutations (purchase/restock) are single conditional UPDATE
//! statements: the sufficiency check and the decrement execute atomically
//! at the storage layer, so concurrent purchases can never drive
//! `quantity` negative.

use sqlx::PgPool;
use sweetshop_core::search::build_like_pattern;
use sweetshop_core::types::DbId;

use crate::models::sweet::{CreateSweet, Sweet, SweetFilter, SweetWithCreator, UpdateSweet};

/// Column list shared across single-table queries.
const COLUMNS: &str =
    "id, name, category, price, quantity, description, image, created_by, created_at, updated_at";

/// Column list for queries joining the creator's username.
const JOINED_COLUMNS: &str = "s.id, s.name, s.category, s.price, s.quantity, s.description, \
    s.image, s.created_by, u.username AS created_by_username, s.created_at, s.updated_at";

/// Outcome of a conditional stock decrement.
#[derive(Debug)]
pub enum PurchaseOutcome {
    /// Stock was sufficient; holds the row after the decrement.
    Purchased(Sweet),
    /// Not enough stock; holds the quantity currently available.
    Insufficient { available: i64 },
    /// No sweet with the given id.
    NotFound,
}

/// Provides CRUD and stock operations for sweets.
pub struct SweetRepo;

impl SweetRepo {
    /// Insert a new sweet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSweet) -> Result<Sweet, sqlx::Error> {
        let query = format!(
            "INSERT INTO sweets (name, category, price, quantity, description, image, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sweet>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(input.quantity)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a sweet by id, joined with its creator's username.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SweetWithCreator>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM sweets s
             JOIN users u ON u.id = s.created_by
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, SweetWithCreator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of sweets, most recently created first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SweetWithCreator>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM sweets s
             JOIN users u ON u.id = s.created_by
             ORDER BY s.created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, SweetWithCreator>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of sweets.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sweets")
            .fetch_one(pool)
            .await
    }

    /// Search sweets with the composable filter. All present constraints
    /// are ANDed; absent constraints match everything.
    pub async fn search(
        pool: &PgPool,
        filter: &SweetFilter,
    ) -> Result<Vec<SweetWithCreator>, sqlx::Error> {
        let pattern = filter.q.as_deref().and_then(build_like_pattern);
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM sweets s
             JOIN users u ON u.id = s.created_by
             WHERE ($1::TEXT IS NULL
                    OR s.name ILIKE $1
                    OR s.category ILIKE $1
                    OR s.description ILIKE $1)
               AND ($2::TEXT IS NULL OR s.category = $2)
               AND ($3::DOUBLE PRECISION IS NULL OR s.price >= $3)
               AND ($4::DOUBLE PRECISION IS NULL OR s.price <= $4)
             ORDER BY s.created_at DESC"
        );
        sqlx::query_as::<_, SweetWithCreator>(&query)
            .bind(pattern)
            .bind(&filter.category)
            .bind(filter.min_price)
            .bind(filter.max_price)
            .fetch_all(pool)
            .await
    }

    /// Update a sweet. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSweet,
    ) -> Result<Option<Sweet>, sqlx::Error> {
        let query = format!(
            "UPDATE sweets SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                price = COALESCE($4, price),
                quantity = COALESCE($5, quantity),
                description = COALESCE($6, description),
                image = COALESCE($7, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sweet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(input.quantity)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a sweet by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sweets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically decrement stock by `amount` if sufficient.
    ///
    /// The WHERE clause carries the sufficiency check, so the decrement
    /// only applies to a row that can absorb it. When the conditional
    /// update matches no row, a follow-up read distinguishes "not enough
    /// stock" from "no such sweet".
    pub async fn purchase(
        pool: &PgPool,
        id: DbId,
        amount: i64,
    ) -> Result<PurchaseOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE sweets SET quantity = quantity - $2
             WHERE id = $1 AND quantity >= $2
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Sweet>(&query)
            .bind(id)
            .bind(amount)
            .fetch_optional(pool)
            .await?;

        if let Some(sweet) = updated {
            return Ok(PurchaseOutcome::Purchased(sweet));
        }

        match Self::quantity_of(pool, id).await? {
            Some(available) => Ok(PurchaseOutcome::Insufficient { available }),
            None => Ok(PurchaseOutcome::NotFound),
        }
    }

    /// Atomically increment stock by `amount`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn restock(
        pool: &PgPool,
        id: DbId,
        amount: i64,
    ) -> Result<Option<Sweet>, sqlx::Error> {
        let query = format!(
            "UPDATE sweets SET quantity = quantity + $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sweet>(&query)
            .bind(id)
            .bind(amount)
            .fetch_optional(pool)
            .await
    }

    /// Current stock level, or `None` if the sweet does not exist.
    async fn quantity_of(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT quantity FROM sweets WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
