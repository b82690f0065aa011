//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AnswerId, AssessmentStatus, DomainError, ErrorCode, QuestionId};

/// Validation failures raised by the session controller.
///
/// All are caller errors: surfaced immediately, never retried, and they
/// leave the session state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The question id is not part of the bank.
    #[error("Unknown question: {0}")]
    InvalidQuestion(QuestionId),

    /// The answer id is not one of the question's answers.
    #[error("Answer '{answer_id}' is not offered by question '{question_id}'")]
    InvalidAnswer {
        question_id: QuestionId,
        answer_id: AnswerId,
    },

    /// The question already has a response in this session.
    #[error("Question '{0}' has already been answered")]
    QuestionAlreadyAnswered(QuestionId),

    /// A mutation was attempted after completion.
    #[error("Assessment is already complete")]
    SessionAlreadyComplete,

    /// The status lifecycle forbids this move.
    #[error("Cannot move assessment from {from} to {to}")]
    InvalidStateTransition {
        from: AssessmentStatus,
        to: AssessmentStatus,
    },
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::InvalidQuestion(_) => ErrorCode::InvalidQuestion,
            AssessmentError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            AssessmentError::QuestionAlreadyAnswered(_) => ErrorCode::InvalidQuestion,
            AssessmentError::SessionAlreadyComplete => ErrorCode::SessionAlreadyComplete,
            AssessmentError::InvalidStateTransition { .. } => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            AssessmentError::InvalidQuestion(question_id)
            | AssessmentError::QuestionAlreadyAnswered(question_id) => {
                base.with_detail("question_id", question_id.as_str())
            }
            AssessmentError::InvalidAnswer {
                question_id,
                answer_id,
            } => base
                .with_detail("question_id", question_id.as_str())
                .with_detail("answer_id", answer_id.as_str()),
            AssessmentError::SessionAlreadyComplete => base,
            AssessmentError::InvalidStateTransition { from, to } => base
                .with_detail("from", from.to_string())
                .with_detail("to", to.to_string()),
        }
    }
}
