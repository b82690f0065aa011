//! Assessment state value and its pure transitions.
//!
//! `AssessmentState` is never mutated in place: every transition takes the
//! current value and returns a new one, so each step can be tested without
//! a controller around it. `AssessmentSession` holds the current value.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{AnswerOutcome, AssessmentError, AssessmentSettings, CompletionReason, Response};
use crate::domain::foundation::{
    AnswerId, AssessmentId, AssessmentStatus, Percentage, QuestionId, StateMachine, Timestamp,
};
use crate::domain::question_bank::{Question, QuestionBank};
use crate::domain::scoring::{Archetype, ArchetypeResult, ScoreTotals};

/// Snapshot of one assessment run.
///
/// # Invariants
///
/// - `responses` is append-only and holds at most one response per question
/// - `totals` is the sum of the weights of every recorded answer
/// - `result` is `Some` exactly when `status` is `Completed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentState {
    id: AssessmentId,
    status: AssessmentStatus,
    responses: Vec<Response>,
    totals: ScoreTotals,
    confidence: Percentage,
    completion: Option<CompletionReason>,
    result: Option<ArchetypeResult>,
}

impl AssessmentState {
    /// Empty, not-started state with a fresh id.
    pub fn new() -> Self {
        Self::with_id(AssessmentId::new())
    }

    /// Empty, not-started state with the given id.
    pub fn with_id(id: AssessmentId) -> Self {
        Self {
            id,
            status: AssessmentStatus::NotStarted,
            responses: Vec::new(),
            totals: ScoreTotals::ZERO,
            confidence: Percentage::ZERO,
            completion: None,
            result: None,
        }
    }

    /// Rebuilds a state by replaying recorded responses in order.
    ///
    /// Totals, confidence, status and result are recomputed, never trusted.
    pub fn replay(
        bank: &QuestionBank,
        settings: &AssessmentSettings,
        id: AssessmentId,
        responses: &[Response],
    ) -> Result<Self, AssessmentError> {
        responses.iter().try_fold(Self::with_id(id), |state, response| {
            state
                .answer(
                    bank,
                    settings,
                    &response.question_id,
                    &response.answer_id,
                    response.answered_at,
                )
                .map(|(next, _)| next)
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    pub fn totals(&self) -> ScoreTotals {
        self.totals
    }

    pub fn confidence(&self) -> Percentage {
        self.confidence
    }

    pub fn completion(&self) -> Option<CompletionReason> {
        self.completion
    }

    pub fn is_complete(&self) -> bool {
        self.status == AssessmentStatus::Completed
    }

    /// The committed result; `None` until the session completes.
    pub fn result(&self) -> Option<&ArchetypeResult> {
        self.result.as_ref()
    }

    /// The committed label; never a provisional one.
    pub fn archetype(&self) -> Option<Archetype> {
        self.result.as_ref().map(|r| r.archetype)
    }

    pub fn has_answered(&self, question_id: &QuestionId) -> bool {
        self.responses.iter().any(|r| &r.question_id == question_id)
    }

    pub fn answered_ids(&self) -> HashSet<QuestionId> {
        self.responses.iter().map(|r| r.question_id.clone()).collect()
    }

    /// Share of the quiz length answered so far, capped at 100%.
    pub fn progress(&self, settings: &AssessmentSettings) -> Percentage {
        Percentage::of(self.responses.len(), settings.termination().max_questions())
    }

    /// Pure predicate over the current evidence.
    pub fn should_terminate_early(&self, settings: &AssessmentSettings) -> bool {
        settings
            .termination()
            .should_terminate_early(self.responses.len(), self.confidence)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Rebuilds a snapshot against `bank` and `settings`.
    ///
    /// Responses are replayed as in [`replay`](Self::replay). A snapshot
    /// that was completed by [`advance`](Self::advance) rather than by an
    /// answer is completed again when the same check still holds.
    pub fn restore(
        bank: &QuestionBank,
        settings: &AssessmentSettings,
        snapshot: &AssessmentState,
    ) -> Result<Self, AssessmentError> {
        let state = Self::replay(bank, settings, snapshot.id(), snapshot.responses())?;
        if !snapshot.is_complete() || state.is_complete() {
            return Ok(state);
        }
        match state.pending_completion(bank, settings) {
            Some(reason) => state.complete(reason, settings),
            None => Ok(state),
        }
    }

    /// Picks the next question, completing the session instead when the
    /// evidence is already decisive or nothing is left to ask.
    pub fn advance<'b>(
        &self,
        bank: &'b QuestionBank,
        settings: &AssessmentSettings,
    ) -> Result<(Self, Option<&'b Question>), AssessmentError> {
        if self.is_complete() {
            return Ok((self.clone(), None));
        }
        if let Some(reason) = self.pending_completion(bank, settings) {
            return Ok((self.clone().complete(reason, settings)?, None));
        }
        Ok((self.clone(), bank.next_unanswered(&self.answered_ids())))
    }

    /// Records an answer and re-evaluates the termination policy.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadyComplete` if the session has completed
    /// - `InvalidQuestion` if the question is not in the bank
    /// - `InvalidAnswer` if the answer does not belong to the question
    /// - `QuestionAlreadyAnswered` if the question already has a response
    pub fn answer(
        &self,
        bank: &QuestionBank,
        settings: &AssessmentSettings,
        question_id: &QuestionId,
        answer_id: &AnswerId,
        answered_at: Timestamp,
    ) -> Result<(Self, AnswerOutcome), AssessmentError> {
        if !self.status.accepts_answers() {
            return Err(AssessmentError::SessionAlreadyComplete);
        }
        let question = bank
            .question(question_id)
            .ok_or_else(|| AssessmentError::InvalidQuestion(question_id.clone()))?;
        let answer = question
            .answer(answer_id)
            .ok_or_else(|| AssessmentError::InvalidAnswer {
                question_id: question_id.clone(),
                answer_id: answer_id.clone(),
            })?;
        if self.has_answered(question_id) {
            return Err(AssessmentError::QuestionAlreadyAnswered(question_id.clone()));
        }

        let response = Response::new(question_id.clone(), answer_id.clone(), answered_at);

        let mut next = self.clone();
        next.responses.push(response.clone());
        next.totals = self.totals.apply(answer);
        next.confidence = settings
            .estimator()
            .estimate(next.totals, next.responses.len());
        if next.status == AssessmentStatus::NotStarted {
            next = next.with_status(AssessmentStatus::InProgress)?;
        }

        let completion = next.completion_due(bank, settings);
        if let Some(reason) = completion {
            next = next.complete(reason, settings)?;
        }

        let outcome = AnswerOutcome {
            response,
            totals: next.totals,
            confidence: next.confidence,
            completion,
        };
        Ok((next, outcome))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn completion_due(
        &self,
        bank: &QuestionBank,
        settings: &AssessmentSettings,
    ) -> Option<CompletionReason> {
        if settings.termination().is_exhausted(self.responses.len()) {
            Some(CompletionReason::MaxQuestionsReached)
        } else {
            self.pending_completion(bank, settings)
        }
    }

    /// Completion `advance` would apply before asking another question.
    fn pending_completion(
        &self,
        bank: &QuestionBank,
        settings: &AssessmentSettings,
    ) -> Option<CompletionReason> {
        if self.should_terminate_early(settings) {
            Some(CompletionReason::EarlyTermination)
        } else if bank.remaining(&self.answered_ids()) == 0 {
            Some(CompletionReason::BankExhausted)
        } else {
            None
        }
    }

    fn complete(
        self,
        reason: CompletionReason,
        settings: &AssessmentSettings,
    ) -> Result<Self, AssessmentError> {
        let result = ArchetypeResult::compute(
            self.totals,
            self.responses.len(),
            &settings.estimator(),
            &settings.classifier(),
        );
        Ok(Self {
            completion: Some(reason),
            result: Some(result),
            ..self.with_status(AssessmentStatus::Completed)?
        })
    }

    fn with_status(self, target: AssessmentStatus) -> Result<Self, AssessmentError> {
        let status = self.status.transition_to(target).map_err(|_| {
            AssessmentError::InvalidStateTransition {
                from: self.status,
                to: target,
            }
        })?;
        Ok(Self { status, ..self })
    }
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::new()
    }
}
