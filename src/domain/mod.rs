//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `question_bank` - Static questionnaire data and validation
//! - `scoring` - Pure services: totals, confidence, archetype classification
//! - `assessment` - Session state, transitions and the session controller

pub mod assessment;
pub mod foundation;
pub mod question_bank;
pub mod scoring;
