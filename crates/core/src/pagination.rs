//! Pagination vocabulary shared by the repository and HTTP layers.
//!
//! List endpoints accept `limit`/`offset` query parameters. Out-of-range
//! values are rejected with a validation error rather than clamped, so a
//! client paging past the corpus gets a 400 instead of a silently adjusted
//! window.

use crate::error::CoreError;

/// Default number of rows per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum number of rows per page.
pub const MAX_PAGE_LIMIT: i64 = 250;

/// Resolve a requested `limit`, enforcing `1..=MAX_PAGE_LIMIT`.
pub fn validate_limit(limit: Option<i64>) -> Result<i64, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if (1..=MAX_PAGE_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(CoreError::Validation(format!(
            "limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"
        )))
    }
}

/// Resolve a requested `offset`, which must be non-negative.
pub fn validate_offset(offset: Option<i64>) -> Result<i64, CoreError> {
    let offset = offset.unwrap_or(0);
    if offset >= 0 {
        Ok(offset)
    } else {
        Err(CoreError::Validation(format!(
            "offset must be non-negative, got {offset}"
        )))
    }
}
