//! Typed path parameter helpers.

use weightlog_core::error::AppError;
use weightlog_core::types::WeightId;

/// Parses a weight id from a path segment.
pub fn parse_weight_id(s: &str) -> Result<WeightId, AppError> {
    s.parse::<WeightId>()
        .map_err(|_| AppError::invalid_input(format!("Invalid weight id: {s}")))
}
