//! Running per-dimension score totals.

use serde::{Deserialize, Serialize};

use crate::domain::question_bank::{Answer, Dimension};

/// Accumulated weights on both dimensions.
///
/// Pure addition with no clamping: after N responses each total lies in
/// `[-2N, 2N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreTotals {
    pub a: i32,
    pub b: i32,
}

impl ScoreTotals {
    /// Totals before any response.
    pub const ZERO: Self = Self { a: 0, b: 0 };

    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Adds one response's weights, returning the new totals.
    pub fn accumulate(self, weight_a: i32, weight_b: i32) -> Self {
        Self {
            a: self.a + weight_a,
            b: self.b + weight_b,
        }
    }

    /// Adds the weights carried by an answer.
    pub fn apply(self, answer: &Answer) -> Self {
        self.accumulate(answer.weight_a, answer.weight_b)
    }

    /// Total on the given dimension.
    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Tactics => self.a,
            Dimension::Temperament => self.b,
        }
    }
}
