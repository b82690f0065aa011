//! Assessment engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::{
    AssessmentSettings, TerminationPolicy, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MAX_QUESTIONS,
    DEFAULT_MIN_QUESTIONS,
};
use crate::domain::scoring::{
    ConfidenceWeights, DEFAULT_MAGNITUDE_WEIGHT, DEFAULT_NEUTRAL_THRESHOLD,
    DEFAULT_RESPONSE_WEIGHT,
};

/// Engine tuning knobs
///
/// Every field has a default, so the whole section may be omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Responses required before early termination is considered
    #[serde(default = "default_min_questions")]
    pub min_questions: usize,

    /// Quiz length
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,

    /// Confidence percentage that ends the quiz early
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: u8,

    /// Totals closer to zero than this count as no lean
    #[serde(default = "default_neutral_threshold")]
    pub neutral_threshold: i32,

    /// Share of confidence driven by answer strength
    #[serde(default = "default_magnitude_weight")]
    pub magnitude_weight: f64,

    /// Share of confidence driven by response count
    #[serde(default = "default_response_weight")]
    pub response_weight: f64,
}

impl EngineConfig {
    /// Build the domain settings this configuration describes
    pub fn to_settings(&self) -> Result<AssessmentSettings, ValidationError> {
        let termination = TerminationPolicy::new(
            self.min_questions,
            self.max_questions,
            self.confidence_threshold,
        )?;
        let weights = ConfidenceWeights::new(self.magnitude_weight, self.response_weight)?;
        Ok(AssessmentSettings::new(
            termination,
            weights,
            self.neutral_threshold,
        )?)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_settings().map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_questions: default_min_questions(),
            max_questions: default_max_questions(),
            confidence_threshold: default_confidence_threshold(),
            neutral_threshold: default_neutral_threshold(),
            magnitude_weight: default_magnitude_weight(),
            response_weight: default_response_weight(),
        }
    }
}

fn default_min_questions() -> usize {
    DEFAULT_MIN_QUESTIONS
}

fn default_max_questions() -> usize {
    DEFAULT_MAX_QUESTIONS
}

fn default_confidence_threshold() -> u8 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_neutral_threshold() -> i32 {
    DEFAULT_NEUTRAL_THRESHOLD
}

fn default_magnitude_weight() -> f64 {
    DEFAULT_MAGNITUDE_WEIGHT
}

fn default_response_weight() -> f64 {
    DEFAULT_RESPONSE_WEIGHT
}
