//! Convenience result type alias for Rentwise.

use crate::error::AppError;

/// A specialized `Result` type for Rentwise operations.
pub type AppResult<T> = Result<T, AppError>;
