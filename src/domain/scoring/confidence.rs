//! Confidence Estimator - how decisively the evidence points somewhere.
//!
//! Confidence blends two terms:
//!
//! - **Magnitude**: average absolute weight per answered question across
//!   both dimensions, normalized by the largest per-question weight and
//!   capped at 1.0.
//! - **Responses**: share of the configured quiz length answered so far,
//!   capped at 1.0.
//!
//! `confidence = round((magnitude * w_m + responses * w_r) * 100)` where the
//! weights default to 0.7 / 0.3 and are configurable.

use serde::{Deserialize, Serialize};

use super::ScoreTotals;
use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::question_bank::MAX_WEIGHT;

/// Default share of confidence driven by answer strength.
pub const DEFAULT_MAGNITUDE_WEIGHT: f64 = 0.7;

/// Default share of confidence driven by response count.
pub const DEFAULT_RESPONSE_WEIGHT: f64 = 0.3;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Relative weights of the two confidence terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    pub magnitude: f64,
    pub responses: f64,
}

impl ConfidenceWeights {
    /// Creates weights, requiring each in `[0, 1]` and a sum of 1.
    pub fn new(magnitude: f64, responses: f64) -> Result<Self, ValidationError> {
        for (field, value) in [("magnitude_weight", magnitude), ("response_weight", responses)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("must be between 0.0 and 1.0, got {}", value),
                ));
            }
        }
        if ((magnitude + responses) - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::invalid_format(
                "confidence_weights",
                format!("must sum to 1.0, got {}", magnitude + responses),
            ));
        }
        Ok(Self {
            magnitude,
            responses,
        })
    }
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            magnitude: DEFAULT_MAGNITUDE_WEIGHT,
            responses: DEFAULT_RESPONSE_WEIGHT,
        }
    }
}

/// Derives a 0-100 confidence score from totals and response count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEstimator {
    weights: ConfidenceWeights,
    max_questions: usize,
}

impl ConfidenceEstimator {
    pub fn new(weights: ConfidenceWeights, max_questions: usize) -> Self {
        Self {
            weights,
            max_questions,
        }
    }

    /// Estimates confidence for the given evidence.
    ///
    /// # Edge Cases
    /// - No responses: 0%
    /// - Totals beyond the weight range saturate the magnitude term at 1.0
    pub fn estimate(&self, totals: ScoreTotals, response_count: usize) -> Percentage {
        if response_count == 0 {
            return Percentage::ZERO;
        }

        let magnitude = f64::from(totals.a).abs() + f64::from(totals.b).abs();
        let avg_magnitude = magnitude / (response_count as f64 * 2.0);
        let base_confidence = (avg_magnitude / f64::from(MAX_WEIGHT)).min(1.0);

        let response_factor = if self.max_questions == 0 {
            1.0
        } else {
            (response_count as f64 / self.max_questions as f64).min(1.0)
        };

        Percentage::from_fraction(
            base_confidence * self.weights.magnitude + response_factor * self.weights.responses,
        )
    }
}

impl Default for ConfidenceEstimator {
    fn default() -> Self {
        Self::new(ConfidenceWeights::default(), 10)
    }
}
