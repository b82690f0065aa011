//! Question bank module.
//!
//! Holds the static questionnaire: questions, their weighted answers, and
//! the validated, ordered bank that sessions pull questions from. The bank
//! never reorders questions; adaptivity lives in the termination policy.

mod bank;
mod question;

pub use bank::{QuestionBank, QuestionBankError, MAX_WEIGHT, MIN_WEIGHT};
pub use question::{Answer, Dimension, Pole, Question};
