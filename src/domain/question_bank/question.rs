//! Question and answer types for the static data contract.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AnswerId, QuestionId};

/// One of the two independent signed scales every answer contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Dimension A: tactical (+) versus positional (-) play.
    #[serde(alias = "dim_a")]
    Tactics,
    /// Dimension B: bold (+) versus careful (-) temperament.
    #[serde(alias = "dim_b")]
    Temperament,
}

impl Dimension {
    /// Both dimensions, A first.
    pub const ALL: [Dimension; 2] = [Dimension::Tactics, Dimension::Temperament];

    /// Human-readable name of the given pole of this dimension.
    pub fn pole_name(&self, pole: Pole) -> &'static str {
        match (self, pole) {
            (Dimension::Tactics, Pole::Positive) => "tactical",
            (Dimension::Tactics, Pole::Negative) => "positional",
            (Dimension::Temperament, Pole::Positive) => "bold",
            (Dimension::Temperament, Pole::Negative) => "careful",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Tactics => write!(f, "Tactics"),
            Dimension::Temperament => write!(f, "Temperament"),
        }
    }
}

/// Which side of zero a dimension total falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pole {
    Positive,
    Negative,
}

impl Pole {
    /// Pole of an accumulated total. Zero resolves to `Positive`.
    pub fn of(total: i32) -> Self {
        if total >= 0 {
            Pole::Positive
        } else {
            Pole::Negative
        }
    }
}

/// A single answer choice with signed weights on both dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
    #[serde(default)]
    pub weight_a: i32,
    #[serde(default)]
    pub weight_b: i32,
}

impl Answer {
    pub fn new(id: AnswerId, text: impl Into<String>, weight_a: i32, weight_b: i32) -> Self {
        Self {
            id,
            text: text.into(),
            weight_a,
            weight_b,
        }
    }

    /// Weight this answer contributes to the given dimension.
    pub fn weight(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Tactics => self.weight_a,
            Dimension::Temperament => self.weight_b,
        }
    }

    /// A neutral answer moves neither dimension.
    pub fn is_neutral(&self) -> bool {
        self.weight_a == 0 && self.weight_b == 0
    }
}

/// A questionnaire item offering an ordered list of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    /// The dimension this question primarily probes.
    pub dimension: Dimension,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        dimension: Dimension,
        answers: Vec<Answer>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            dimension,
            answers,
        }
    }

    /// Looks up one of this question's answers.
    pub fn answer(&self, answer_id: &AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| &a.id == answer_id)
    }

    /// Returns true if the answer belongs to this question.
    pub fn offers(&self, answer_id: &AnswerId) -> bool {
        self.answer(answer_id).is_some()
    }
}
