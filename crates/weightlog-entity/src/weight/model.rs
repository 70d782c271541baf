//! Weight entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use weightlog_core::result::AppResult;
use weightlog_core::types::WeightId;

use super::validation;

/// One day's maximum and minimum body-weight readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Weight {
    /// Storage-assigned identifier.
    pub id: WeightId,
    /// Calendar date of the readings; unique across all records.
    pub date: String,
    /// Highest reading of the day.
    pub max: i32,
    /// Lowest reading of the day.
    pub min: i32,
    /// `max - min`, stored at write time.
    pub difference: i32,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create or fully replace a weight record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWeight {
    /// Calendar date of the readings.
    pub date: String,
    /// Highest reading of the day.
    pub max: i32,
    /// Lowest reading of the day.
    pub min: i32,
    /// `max - min`.
    pub difference: i32,
}

impl NewWeight {
    /// Build a candidate, trimming the date and computing the difference.
    pub fn new(date: impl Into<String>, max: i32, min: i32) -> Self {
        let date = date.into().trim().to_string();
        Self {
            date,
            max,
            min,
            difference: difference_of(max, min),
        }
    }

    /// Check the candidate against the field rules.
    pub fn validate(&self) -> AppResult<()> {
        validation::validate(&self.date, self.max, self.min)
    }
}

/// `max - min`, saturating at the `i32` bounds for unvalidated input.
pub fn difference_of(max: i32, min: i32) -> i32 {
    max.saturating_sub(min)
}
