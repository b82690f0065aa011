//! Assessment module - adaptive questionnaire sessions.
//!
//! Sequences questions from a `QuestionBank`, accumulates scores, tracks
//! confidence, stops early once the evidence is decisive, and commits an
//! `ArchetypeResult` on completion.
//!
//! # Lifecycle
//!
//! `NotStarted -> InProgress -> Completed`; `reset()` returns to an empty
//! `NotStarted` state with a new `AssessmentId`.

mod errors;
mod response;
mod session;
mod settings;
mod state;

pub use errors::AssessmentError;
pub use response::{AnswerOutcome, CompletionReason, Response};
pub use session::AssessmentSession;
pub use settings::{
    AssessmentSettings, TerminationPolicy, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MAX_QUESTIONS,
    DEFAULT_MIN_QUESTIONS,
};
pub use state::AssessmentState;
