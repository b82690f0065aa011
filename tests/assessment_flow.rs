//! Integration tests for the full host flow.
//!
//! Built-in bank -> session -> result handlers -> filesystem profile store,
//! using only the public API.

use std::sync::Arc;

use tempfile::TempDir;

use adaptive_assessment::adapters::FsProfileStore;
use adaptive_assessment::application::{ClearProfileHandler, LoadProfileHandler, SaveResultHandler};
use adaptive_assessment::config::EngineConfig;
use adaptive_assessment::domain::assessment::{
    AssessmentError, AssessmentSession, AssessmentSettings, AssessmentState, CompletionReason,
};
use adaptive_assessment::domain::foundation::{AssessmentStatus, ErrorCode};
use adaptive_assessment::domain::question_bank::{Answer, QuestionBank};
use adaptive_assessment::domain::scoring::Archetype;

// =============================================================================
// Helpers
// =============================================================================

/// Plays the session to completion, choosing answers with `pick`.
fn play(session: &mut AssessmentSession, pick: fn(&[Answer]) -> &Answer) {
    while let Some(question) = session.next_question().unwrap() {
        let question_id = question.id.clone();
        let answer_id = pick(&question.answers).id.clone();
        session.answer_question(&question_id, &answer_id).unwrap();
    }
}

fn boldest(answers: &[Answer]) -> &Answer {
    answers
        .iter()
        .max_by_key(|a| a.weight_a + a.weight_b)
        .unwrap()
}

fn calmest(answers: &[Answer]) -> &Answer {
    answers
        .iter()
        .min_by_key(|a| a.weight_a + a.weight_b)
        .unwrap()
}

fn fs_handlers(dir: &TempDir) -> (SaveResultHandler, LoadProfileHandler, ClearProfileHandler) {
    let store = Arc::new(FsProfileStore::new(dir.path()));
    (
        SaveResultHandler::new(store.clone()),
        LoadProfileHandler::new(store.clone()),
        ClearProfileHandler::new(store),
    )
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn aggressive_player_is_saved_and_reloaded_as_attacker() {
    let dir = TempDir::new().unwrap();
    let (save, load, _) = fs_handlers(&dir);

    let mut session = AssessmentSession::with_defaults();
    play(&mut session, boldest);

    assert!(session.is_complete());
    assert_eq!(session.status(), AssessmentStatus::Completed);
    assert!(session.response_count() >= 5 && session.response_count() <= 10);
    assert_eq!(session.archetype(), Some(Archetype::Attacker));

    let saved = save.handle(&session).await.unwrap();
    let loaded = load.handle().await.unwrap().unwrap();

    assert_eq!(loaded.result, saved);
    assert!(loaded.result.explanation.starts_with("Attacker"));
}

#[tokio::test]
async fn cautious_player_is_strategist() {
    let mut session = AssessmentSession::with_defaults();
    play(&mut session, calmest);

    assert_eq!(session.archetype(), Some(Archetype::Strategist));
    assert!(session.totals().a < 0 && session.totals().b < 0);
}

#[tokio::test]
async fn saving_before_completion_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (save, load, _) = fs_handlers(&dir);

    let mut session = AssessmentSession::with_defaults();
    let question = session.next_question().unwrap().unwrap();
    let (question_id, answer_id) = (question.id.clone(), question.answers[0].id.clone());
    session.answer_question(&question_id, &answer_id).unwrap();

    let err = save.handle(&session).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AssessmentIncomplete);
    assert!(load.handle().await.unwrap().is_none());
}

#[tokio::test]
async fn corrupted_profile_file_does_not_block_a_new_assessment() {
    let dir = TempDir::new().unwrap();
    let (save, load, clear) = fs_handlers(&dir);
    std::fs::write(dir.path().join("profile.json"), "not a profile").unwrap();

    assert!(load.handle().await.unwrap().is_none());

    let mut session = AssessmentSession::with_defaults();
    play(&mut session, boldest);
    save.handle(&session).await.unwrap();
    assert!(load.handle().await.unwrap().is_some());

    clear.handle().await.unwrap();
    assert!(load.handle().await.unwrap().is_none());
}

#[test]
fn snapshot_survives_json_and_resumes() {
    let mut session = AssessmentSession::with_defaults();
    for _ in 0..3 {
        let question = session.next_question().unwrap().unwrap();
        let (question_id, answer_id) = (question.id.clone(), question.answers[1].id.clone());
        session.answer_question(&question_id, &answer_id).unwrap();
    }

    let json = serde_json::to_string(session.state()).unwrap();
    let snapshot: AssessmentState = serde_json::from_str(&json).unwrap();
    let mut resumed = AssessmentSession::resume(
        QuestionBank::builtin(),
        AssessmentSettings::default(),
        &snapshot,
    )
    .unwrap();

    assert_eq!(resumed.id(), session.id());
    assert_eq!(resumed.totals(), session.totals());
    assert_eq!(resumed.confidence(), session.confidence());
    assert_eq!(
        resumed.next_question().unwrap().map(|q| q.id.clone()),
        session.next_question().unwrap().map(|q| q.id.clone())
    );
}

#[test]
fn configured_short_quiz_stops_at_its_maximum() {
    let config = EngineConfig {
        min_questions: 2,
        max_questions: 3,
        confidence_threshold: 100,
        ..EngineConfig::default()
    };
    let mut session = AssessmentSession::new(QuestionBank::builtin(), config.to_settings().unwrap());
    play(&mut session, |answers| &answers[answers.len() - 1]);

    assert_eq!(session.response_count(), 3);
    assert_eq!(session.completion(), Some(CompletionReason::MaxQuestionsReached));
}

#[test]
fn custom_bank_is_exhausted_before_the_maximum() {
    let yaml = r#"
- id: only
  text: "One question"
  dimension: tactics
  answers:
    - { id: only-yes, text: "Yes", weight_a: 2, weight_b: 2 }
    - { id: only-no, text: "No", weight_a: -2, weight_b: -2 }
"#;
    let bank = Arc::new(QuestionBank::from_yaml_str(yaml).unwrap());
    let mut session = AssessmentSession::new(bank, AssessmentSettings::default());
    play(&mut session, boldest);

    assert_eq!(session.completion(), Some(CompletionReason::BankExhausted));
    assert_eq!(session.archetype(), Some(Archetype::Attacker));

    let question_id = "only".parse().unwrap();
    let answer_id = "only-no".parse().unwrap();
    assert_eq!(
        session.answer_question(&question_id, &answer_id),
        Err(AssessmentError::SessionAlreadyComplete)
    );
}
