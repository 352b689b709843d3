use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// Purchase rejected because the requested amount exceeds current stock.
    #[error("Insufficient stock. Only {available} items available.")]
    InsufficientStock { available: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
