//! Archetype classification of accumulated scores.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ScoreTotals;
use crate::domain::question_bank::Pole;

/// Default width of the neutral dead-zone around the origin.
pub const DEFAULT_NEUTRAL_THRESHOLD: i32 = 2;

/// Learner archetype: four quadrants of the score plane plus a neutral centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Tactical, bold (A+, B+)
    Attacker,
    /// Tactical, careful (A+, B-)
    Tactician,
    /// Positional, bold (A-, B+)
    Explorer,
    /// Positional, careful (A-, B-)
    Strategist,
    /// No decisive leaning on either dimension
    Balanced,
}

impl Archetype {
    /// Quadrant label for a pair of poles.
    pub fn from_poles(a: Pole, b: Pole) -> Self {
        match (a, b) {
            (Pole::Positive, Pole::Positive) => Self::Attacker,
            (Pole::Positive, Pole::Negative) => Self::Tactician,
            (Pole::Negative, Pole::Positive) => Self::Explorer,
            (Pole::Negative, Pole::Negative) => Self::Strategist,
        }
    }

    /// Returns true for the neutral dead-zone label.
    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Balanced)
    }

    /// One-line description used in result explanations.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Attacker => "You look for sharp, forcing play and enjoy taking risks.",
            Self::Tactician => "You love calculation but only strike when it is sound.",
            Self::Explorer => "You favour long-term plans and aren't afraid of unbalanced positions.",
            Self::Strategist => "You prefer solid structures and steady, patient improvement.",
            Self::Balanced => "You adapt your style to the position without a strong preference.",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attacker => write!(f, "Attacker"),
            Self::Tactician => write!(f, "Tactician"),
            Self::Explorer => write!(f, "Explorer"),
            Self::Strategist => write!(f, "Strategist"),
            Self::Balanced => write!(f, "Balanced"),
        }
    }
}

/// Maps score totals to an archetype.
///
/// Both totals strictly inside `(-threshold, threshold)` yield `Balanced`;
/// otherwise each dimension picks its pole, with a zero total resolving
/// to the positive pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeClassifier {
    neutral_threshold: i32,
}

impl ArchetypeClassifier {
    pub fn new(neutral_threshold: i32) -> Self {
        Self { neutral_threshold }
    }

    pub fn neutral_threshold(&self) -> i32 {
        self.neutral_threshold
    }

    /// Returns true if the totals sit inside the neutral dead-zone.
    pub fn is_neutral(&self, totals: ScoreTotals) -> bool {
        totals.a.unsigned_abs() < self.neutral_threshold.unsigned_abs()
            && totals.b.unsigned_abs() < self.neutral_threshold.unsigned_abs()
    }

    pub fn classify(&self, totals: ScoreTotals) -> Archetype {
        if self.is_neutral(totals) {
            return Archetype::Balanced;
        }
        Archetype::from_poles(Pole::of(totals.a), Pole::of(totals.b))
    }
}

impl Default for ArchetypeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_NEUTRAL_THRESHOLD)
    }
}
