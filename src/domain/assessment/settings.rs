//! Tunable policy for a single assessment run.

use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::scoring::{
    ArchetypeClassifier, ConfidenceEstimator, ConfidenceWeights, DEFAULT_NEUTRAL_THRESHOLD,
};

/// Minimum responses before early termination is considered.
pub const DEFAULT_MIN_QUESTIONS: usize = 5;

/// Quiz length; the session always completes after this many responses.
pub const DEFAULT_MAX_QUESTIONS: usize = 10;

/// Confidence needed to stop early.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u8 = 80;

/// When to stop asking questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminationPolicy {
    min_questions: usize,
    max_questions: usize,
    confidence_threshold: Percentage,
}

impl TerminationPolicy {
    /// Creates a policy.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `max_questions` is zero or `confidence_threshold` exceeds 100
    /// - `InvalidFormat` if `min_questions` exceeds `max_questions`
    pub fn new(
        min_questions: usize,
        max_questions: usize,
        confidence_threshold: u8,
    ) -> Result<Self, ValidationError> {
        if max_questions == 0 {
            return Err(ValidationError::out_of_range(
                "max_questions",
                1,
                i32::MAX,
                0,
            ));
        }
        if min_questions > max_questions {
            return Err(ValidationError::invalid_format(
                "min_questions",
                format!(
                    "must not exceed max_questions ({} > {})",
                    min_questions, max_questions
                ),
            ));
        }
        let confidence_threshold = Percentage::try_new(confidence_threshold)?;

        Ok(Self {
            min_questions,
            max_questions,
            confidence_threshold,
        })
    }

    pub fn min_questions(&self) -> usize {
        self.min_questions
    }

    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    pub fn confidence_threshold(&self) -> Percentage {
        self.confidence_threshold
    }

    /// Early termination: enough responses and enough confidence.
    pub fn should_terminate_early(&self, response_count: usize, confidence: Percentage) -> bool {
        response_count >= self.min_questions && confidence >= self.confidence_threshold
    }

    /// The quiz length has been reached.
    pub fn is_exhausted(&self, response_count: usize) -> bool {
        response_count >= self.max_questions
    }
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        Self {
            min_questions: DEFAULT_MIN_QUESTIONS,
            max_questions: DEFAULT_MAX_QUESTIONS,
            confidence_threshold: Percentage::new(DEFAULT_CONFIDENCE_THRESHOLD),
        }
    }
}

/// Everything a session needs besides its question bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentSettings {
    termination: TerminationPolicy,
    confidence_weights: ConfidenceWeights,
    neutral_threshold: i32,
}

impl AssessmentSettings {
    /// Creates settings.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `neutral_threshold` is negative
    pub fn new(
        termination: TerminationPolicy,
        confidence_weights: ConfidenceWeights,
        neutral_threshold: i32,
    ) -> Result<Self, ValidationError> {
        if neutral_threshold < 0 {
            return Err(ValidationError::out_of_range(
                "neutral_threshold",
                0,
                i32::MAX,
                neutral_threshold,
            ));
        }
        Ok(Self {
            termination,
            confidence_weights,
            neutral_threshold,
        })
    }

    pub fn termination(&self) -> &TerminationPolicy {
        &self.termination
    }

    pub fn confidence_weights(&self) -> ConfidenceWeights {
        self.confidence_weights
    }

    pub fn neutral_threshold(&self) -> i32 {
        self.neutral_threshold
    }

    pub fn estimator(&self) -> ConfidenceEstimator {
        ConfidenceEstimator::new(self.confidence_weights, self.termination.max_questions)
    }

    pub fn classifier(&self) -> ArchetypeClassifier {
        ArchetypeClassifier::new(self.neutral_threshold)
    }
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            termination: TerminationPolicy::default(),
            confidence_weights: ConfidenceWeights::default(),
            neutral_threshold: DEFAULT_NEUTRAL_THRESHOLD,
        }
    }
}
