//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the assessment domain.

mod assessment_status;
mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use assessment_status::AssessmentStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnswerId, AssessmentId, QuestionId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
