//! Field-level validation failure type.

use serde::Serialize;

/// A single field-level validation failure, surfaced to API callers in
/// the `{"errors": [...]}` response body.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
