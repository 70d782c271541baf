//! Form bodies accepted by the weight routes.

use serde::{Deserialize, Serialize};

use weightlog_core::error::AppError;
use weightlog_core::result::AppResult;
use weightlog_entity::weight::{NewWeight, Weight};

/// URL-encoded body of the create and edit forms.
///
/// Fields are kept as raw strings so a rejected submission can be shown
/// back to the user exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightForm {
    /// Calendar date.
    #[serde(default)]
    pub date: String,
    /// Highest reading, as typed.
    #[serde(default)]
    pub max: String,
    /// Lowest reading, as typed.
    #[serde(default)]
    pub min: String,
}

impl WeightForm {
    /// Parse the numeric fields and build a candidate record.
    ///
    /// Fails with `InvalidInput` naming the first field that is not an
    /// integer; the date is passed through for validation.
    pub fn parse(&self) -> AppResult<NewWeight> {
        let max = self
            .max
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::invalid_input("Please fill the max value correctly"))?;
        let min = self
            .min
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::invalid_input("Please fill the min value correctly"))?;

        Ok(NewWeight::new(self.date.as_str(), max, min))
    }
}

impl From<&Weight> for WeightForm {
    fn from(weight: &Weight) -> Self {
        Self {
            date: weight.date.clone(),
            max: weight.max.to_string(),
            min: weight.min.to_string(),
        }
    }
}
