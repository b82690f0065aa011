//! AssessmentSession - the controller a host drives question by question.
//!
//! Thin mutable wrapper around `AssessmentState`. Each operation runs to
//! completion synchronously; there is nothing to cancel besides `reset()`.

use std::sync::Arc;

use tracing::{debug, info};

use super::{
    AnswerOutcome, AssessmentError, AssessmentSettings, AssessmentState, CompletionReason,
    Response,
};
use crate::domain::foundation::{
    AnswerId, AssessmentId, AssessmentStatus, Percentage, QuestionId, Timestamp,
};
use crate::domain::question_bank::{Question, QuestionBank};
use crate::domain::scoring::{Archetype, ArchetypeResult, ScoreTotals};

/// One in-progress assessment over a shared question bank.
///
/// Exclusively owns its state; never shared between concurrent callers.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    settings: AssessmentSettings,
    state: AssessmentState,
}

impl AssessmentSession {
    /// Starts an empty session.
    pub fn new(bank: Arc<QuestionBank>, settings: AssessmentSettings) -> Self {
        Self {
            bank,
            settings,
            state: AssessmentState::new(),
        }
    }

    /// Starts an empty session over the built-in bank with default policy.
    pub fn with_defaults() -> Self {
        Self::new(QuestionBank::builtin(), AssessmentSettings::default())
    }

    /// Resumes from a snapshot by replaying its responses against `bank`.
    ///
    /// # Errors
    ///
    /// Any `AssessmentError` raised while replaying; the snapshot does not
    /// fit this bank or policy.
    pub fn resume(
        bank: Arc<QuestionBank>,
        settings: AssessmentSettings,
        snapshot: &AssessmentState,
    ) -> Result<Self, AssessmentError> {
        let state = AssessmentState::restore(&bank, &settings, snapshot)?;
        debug!(
            assessment_id = %state.id(),
            responses = state.response_count(),
            status = %state.status(),
            "Resumed assessment"
        );
        Ok(Self {
            bank,
            settings,
            state,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sequencing
    // ─────────────────────────────────────────────────────────────────────────

    /// Next question to ask, or `None` once the session is complete.
    ///
    /// Completes the session instead of returning a question when early
    /// termination already holds.
    pub fn next_question(&mut self) -> Result<Option<&Question>, AssessmentError> {
        let (next, question) = self.state.advance(&self.bank, &self.settings)?;
        let newly_completed = !self.state.is_complete() && next.is_complete();
        self.state = next;
        if newly_completed {
            self.log_completion();
        }
        Ok(question)
    }

    /// Records an answer stamped with the current time.
    pub fn answer_question(
        &mut self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
    ) -> Result<AnswerOutcome, AssessmentError> {
        self.answer_question_at(question_id, answer_id, Timestamp::now())
    }

    /// Records an answer with an explicit timestamp.
    ///
    /// On error the session is left exactly as it was.
    pub fn answer_question_at(
        &mut self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
        answered_at: Timestamp,
    ) -> Result<AnswerOutcome, AssessmentError> {
        let (next, outcome) = self
            .state
            .answer(&self.bank, &self.settings, question_id, answer_id, answered_at)
            .map_err(|err| {
                debug!(
                    assessment_id = %self.state.id(),
                    question_id = %question_id,
                    answer_id = %answer_id,
                    error = %err,
                    "Rejected answer"
                );
                err
            })?;
        self.state = next;

        debug!(
            assessment_id = %self.state.id(),
            question_id = %question_id,
            answer_id = %answer_id,
            total_a = outcome.totals.a,
            total_b = outcome.totals.b,
            confidence = outcome.confidence.value(),
            "Recorded answer"
        );
        if outcome.completed() {
            self.log_completion();
        }
        Ok(outcome)
    }

    /// Discards all state and starts over with a fresh id. Idempotent.
    pub fn reset(&mut self) {
        let previous = self.state.id();
        self.state = AssessmentState::new();
        debug!(
            previous_assessment_id = %previous,
            assessment_id = %self.state.id(),
            "Reset assessment"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn should_terminate_early(&self) -> bool {
        self.state.should_terminate_early(&self.settings)
    }

    pub fn confidence(&self) -> Percentage {
        self.state.confidence()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Committed archetype; `None` until the session completes.
    pub fn archetype(&self) -> Option<Archetype> {
        self.state.archetype()
    }

    /// Committed result; `None` until the session completes.
    pub fn result(&self) -> Option<&ArchetypeResult> {
        self.state.result()
    }

    pub fn response_count(&self) -> usize {
        self.state.response_count()
    }

    /// Share of the quiz length answered, capped at 100%.
    pub fn progress(&self) -> Percentage {
        self.state.progress(&self.settings)
    }

    pub fn responses(&self) -> &[Response] {
        self.state.responses()
    }

    pub fn totals(&self) -> ScoreTotals {
        self.state.totals()
    }

    pub fn status(&self) -> AssessmentStatus {
        self.state.status()
    }

    pub fn completion(&self) -> Option<CompletionReason> {
        self.state.completion()
    }

    pub fn id(&self) -> AssessmentId {
        self.state.id()
    }

    /// Current state value, e.g. for snapshotting.
    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn settings(&self) -> &AssessmentSettings {
        &self.settings
    }

    fn log_completion(&self) {
        if let Some(result) = self.state.result() {
            info!(
                assessment_id = %self.state.id(),
                archetype = %result.archetype,
                confidence = result.confidence.value(),
                responses = result.response_count,
                reason = ?self.state.completion(),
                "Assessment completed"
            );
        }
    }
}
