//! Averages shown on the list page.

use weightlog_entity::weight::Weight;

/// Arithmetic means of the readings across a set of records.
///
/// An empty set has every mean at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightSummary {
    /// Number of records averaged.
    pub count: usize,
    /// Mean of `max`.
    pub average_max: f64,
    /// Mean of `min`.
    pub average_min: f64,
    /// Mean of the stored `difference`.
    pub average_diff: f64,
}

impl WeightSummary {
    /// Compute the means over `weights`.
    pub fn from_records(weights: &[Weight]) -> Self {
        if weights.is_empty() {
            return Self::default();
        }

        let (total_max, total_min, total_diff) =
            weights.iter().fold((0.0, 0.0, 0.0), |(max, min, diff), w| {
                (
                    max + f64::from(w.max),
                    min + f64::from(w.min),
                    diff + f64::from(w.difference),
                )
            });
        let size = weights.len() as f64;

        Self {
            count: weights.len(),
            average_max: total_max / size,
            average_min: total_min / size,
            average_diff: total_diff / size,
        }
    }

    /// Mean of `max`, two decimals.
    pub fn formatted_max(&self) -> String {
        two_decimals(self.average_max)
    }

    /// Mean of `min`, two decimals.
    pub fn formatted_min(&self) -> String {
        two_decimals(self.average_min)
    }

    /// Mean of `difference`, two decimals.
    pub fn formatted_diff(&self) -> String {
        two_decimals(self.average_diff)
    }
}

fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}
