//! Field rules for weight records.
//!
//! Rules are checked in a fixed order and the first failure wins:
//! date present, max at least 1, min at least 1, max not below min.

use weightlog_core::error::AppError;
use weightlog_core::result::AppResult;

/// Validate one set of readings.
pub fn validate(date: &str, max: i32, min: i32) -> AppResult<()> {
    if date.trim().is_empty() {
        return Err(AppError::validation("Required date"));
    }

    if max < 1 {
        return Err(AppError::validation("Required max weight"));
    }

    if min < 1 {
        return Err(AppError::validation("Required min weight"));
    }

    if max < min {
        return Err(AppError::validation(
            "Max weight could not be smaller than min weight",
        ));
    }

    Ok(())
}
