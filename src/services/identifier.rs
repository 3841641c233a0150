//! Path identifier coercion

use crate::error::{AppError, AppResult};

/// Parse a path token into a book id.
///
/// Only whole-token integers are accepted (`"12"`, `"-3"`, `"+7"`); anything
/// else, including the empty string and `"12abc"`, is an invalid id.
pub fn coerce(token: &str) -> AppResult<i64> {
    token
        .parse::<i64>()
        .map_err(|_| AppError::InvalidId("Book ID must be a number".to_string()))
}
