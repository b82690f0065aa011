//! Final archetype result handed to the host for persistence.

use serde::{Deserialize, Serialize};

use super::{Archetype, ArchetypeClassifier, ConfidenceEstimator, ScoreTotals};
use crate::domain::foundation::Percentage;
use crate::domain::question_bank::{Dimension, Pole};

/// Classification of a completed assessment.
///
/// A pure function of totals and response count: recomputing from the
/// same inputs always yields an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeResult {
    pub archetype: Archetype,
    pub confidence: Percentage,
    pub total_a: i32,
    pub total_b: i32,
    pub response_count: usize,
    pub explanation: String,
}

impl ArchetypeResult {
    pub fn compute(
        totals: ScoreTotals,
        response_count: usize,
        estimator: &ConfidenceEstimator,
        classifier: &ArchetypeClassifier,
    ) -> Self {
        let archetype = classifier.classify(totals);
        let confidence = estimator.estimate(totals, response_count);
        let explanation = explain(archetype, totals, response_count, confidence);

        Self {
            archetype,
            confidence,
            total_a: totals.a,
            total_b: totals.b,
            response_count,
            explanation,
        }
    }

    pub fn totals(&self) -> ScoreTotals {
        ScoreTotals::new(self.total_a, self.total_b)
    }
}

fn explain(
    archetype: Archetype,
    totals: ScoreTotals,
    response_count: usize,
    confidence: Percentage,
) -> String {
    let leaning = if archetype.is_neutral() {
        format!(
            "your answers stay close to the centre (tactics {:+}, temperament {:+})",
            totals.a, totals.b
        )
    } else {
        let describe = |dimension: Dimension| {
            let total = totals.get(dimension);
            format!("{} ({:+})", dimension.pole_name(Pole::of(total)), total)
        };
        format!(
            "your answers lean {} and {}",
            describe(Dimension::Tactics),
            describe(Dimension::Temperament)
        )
    };

    let noun = if response_count == 1 { "response" } else { "responses" };
    format!(
        "{}: {} across {} {}, confidence {}. {}",
        archetype,
        leaning,
        response_count,
        noun,
        confidence,
        archetype.description()
    )
}
