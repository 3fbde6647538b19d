//! Typed path parameter helpers.

use rentwise_core::error::AppError;

/// Parses a numeric identifier from a path segment.
pub fn parse_id(s: &str) -> Result<i32, AppError> {
    s.parse()
        .map_err(|_| AppError::invalid_field("id", format!("Invalid property id: {s}")))
}
