//! Page-based pagination helpers for list endpoints.

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided page number to `>= 1`.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_page_size(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

/// Row offset for a 1-based page number.
pub fn offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}

/// Total page count: `ceil(total / page_size)`. Zero rows means zero pages.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    (total + page_size - 1) / page_size
}
