//! Convenience result type alias for Weightlog.

use crate::error::AppError;

/// A specialized `Result` type for Weightlog operations.
pub type AppResult<T> = Result<T, AppError>;
