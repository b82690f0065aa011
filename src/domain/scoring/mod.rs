//! Scoring Module - Pure services over accumulated evidence.
//!
//! - `ScoreTotals` - Running per-dimension sums
//! - `ConfidenceEstimator` - 0-100 confidence from magnitude and sample size
//! - `ArchetypeClassifier` - Quadrant labels with a neutral dead-zone
//! - `ArchetypeResult` - The finalized, persistable classification
//!
//! Everything here is stateless and side-effect free.

mod accumulator;
mod archetype;
mod confidence;
mod result;

pub use accumulator::ScoreTotals;
pub use archetype::{Archetype, ArchetypeClassifier, DEFAULT_NEUTRAL_THRESHOLD};
pub use confidence::{
    ConfidenceEstimator, ConfidenceWeights, DEFAULT_MAGNITUDE_WEIGHT, DEFAULT_RESPONSE_WEIGHT,
};
pub use result::ArchetypeResult;
