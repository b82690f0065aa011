//! Recorded responses and per-answer outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AnswerId, Percentage, QuestionId, Timestamp};
use crate::domain::scoring::ScoreTotals;

/// Immutable record of one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub answer_id: AnswerId,
    pub answered_at: Timestamp,
}

impl Response {
    pub fn new(question_id: QuestionId, answer_id: AnswerId, answered_at: Timestamp) -> Self {
        Self {
            question_id,
            answer_id,
            answered_at,
        }
    }
}

/// Why a session stopped asking questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// Confidence cleared the threshold after the minimum question count.
    EarlyTermination,
    /// The configured quiz length was reached.
    MaxQuestionsReached,
    /// Every question in the bank has been answered.
    BankExhausted,
}

impl fmt::Display for CompletionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompletionReason::EarlyTermination => "early_termination",
            CompletionReason::MaxQuestionsReached => "max_questions_reached",
            CompletionReason::BankExhausted => "bank_exhausted",
        };
        write!(f, "{}", s)
    }
}

/// What changed as a result of one accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub response: Response,
    pub totals: ScoreTotals,
    pub confidence: Percentage,
    /// Set when this answer completed the session.
    pub completion: Option<CompletionReason>,
}

impl AnswerOutcome {
    pub fn completed(&self) -> bool {
        self.completion.is_some()
    }
}
