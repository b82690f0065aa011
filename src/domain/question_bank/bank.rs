//! QuestionBank - ordered, immutable collection of validated questions.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;
use thiserror::Error;

use super::question::{Dimension, Question};
use crate::domain::foundation::{AnswerId, DomainError, ErrorCode, QuestionId};

/// Smallest weight an answer may carry on either dimension.
pub const MIN_WEIGHT: i32 = -2;

/// Largest weight an answer may carry on either dimension.
pub const MAX_WEIGHT: i32 = 2;

/// Errors raised while loading or validating a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionBankError {
    #[error("Question bank contains no questions")]
    Empty,

    #[error("Question '{0}' has no answers")]
    NoAnswers(QuestionId),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(QuestionId),

    #[error("Duplicate answer id: {0}")]
    DuplicateAnswerId(AnswerId),

    #[error("Answer '{answer_id}' has {dimension} weight {weight}, expected -2..=2")]
    WeightOutOfRange {
        answer_id: AnswerId,
        dimension: Dimension,
        weight: i32,
    },

    #[error("Blank identifier or text in '{0}'")]
    BlankField(String),

    #[error("Failed to parse question bank: {0}")]
    Parse(String),
}

impl From<QuestionBankError> for DomainError {
    fn from(err: QuestionBankError) -> Self {
        DomainError::new(ErrorCode::InvalidQuestionBank, err.to_string())
    }
}

static BUILTIN: Lazy<Arc<QuestionBank>> = Lazy::new(|| {
    let yaml = include_str!("default_questions.yaml");
    let bank = QuestionBank::from_yaml_str(yaml)
        .unwrap_or_else(|e| panic!("Embedded question bank is invalid: {}", e));
    Arc::new(bank)
});

/// Immutable, ordered question set shared read-only by every session.
///
/// # Invariants
///
/// - At least one question
/// - Question ids unique within the bank
/// - Answer ids unique across the whole bank
/// - Every question has at least one answer
/// - Every weight lies in `MIN_WEIGHT..=MAX_WEIGHT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    /// Validates and wraps an ordered list of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        let mut positions = HashMap::with_capacity(questions.len());
        let mut answer_ids = HashSet::new();

        for (position, question) in questions.iter().enumerate() {
            if question.id.as_str().trim().is_empty() || question.text.trim().is_empty() {
                return Err(QuestionBankError::BlankField(question.id.to_string()));
            }
            if positions.insert(question.id.clone(), position).is_some() {
                return Err(QuestionBankError::DuplicateQuestionId(question.id.clone()));
            }
            if question.answers.is_empty() {
                return Err(QuestionBankError::NoAnswers(question.id.clone()));
            }

            for answer in &question.answers {
                if answer.id.as_str().trim().is_empty() || answer.text.trim().is_empty() {
                    return Err(QuestionBankError::BlankField(answer.id.to_string()));
                }
                if !answer_ids.insert(answer.id.clone()) {
                    return Err(QuestionBankError::DuplicateAnswerId(answer.id.clone()));
                }
                for dimension in Dimension::ALL {
                    let weight = answer.weight(dimension);
                    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
                        return Err(QuestionBankError::WeightOutOfRange {
                            answer_id: answer.id.clone(),
                            dimension,
                            weight,
                        });
                    }
                }
            }
        }

        Ok(Self {
            questions,
            positions,
        })
    }

    /// Parses a YAML sequence of questions and validates it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> =
            serde_yaml::from_str(yaml).map_err(|e| QuestionBankError::Parse(e.to_string()))?;
        Self::new(questions)
    }

    /// Parses a JSON array of questions and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> =
            serde_json::from_str(json).map_err(|e| QuestionBankError::Parse(e.to_string()))?;
        Self::new(questions)
    }

    /// The default questionnaire embedded in the binary.
    pub fn builtin() -> Arc<QuestionBank> {
        Arc::clone(&BUILTIN)
    }

    /// First question, in bank order, that has not been answered yet.
    ///
    /// Order is fixed; nothing but the answered set filters questions.
    pub fn next_unanswered(&self, answered: &HashSet<QuestionId>) -> Option<&Question> {
        self.questions.iter().find(|q| !answered.contains(&q.id))
    }

    /// Number of questions not in `answered`.
    pub fn remaining(&self, answered: &HashSet<QuestionId>) -> usize {
        self.questions
            .iter()
            .filter(|q| !answered.contains(&q.id))
            .count()
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.positions.get(id).map(|&position| &self.questions[position])
    }

    /// Returns true if the bank holds a question with this id.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.positions.contains_key(id)
    }

    /// Questions in bank order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question_bank::Answer;

    fn qid(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    fn answer(id: &str, a: i32, b: i32) -> Answer {
        Answer::new(AnswerId::new(id).unwrap(), format!("Answer {}", id), a, b)
    }

    fn question(id: &str, answers: Vec<Answer>) -> Question {
        Question::new(qid(id), format!("Question {}", id), Dimension::Tactics, answers)
    }

    fn three_question_bank() -> QuestionBank {
        QuestionBank::new(vec![
            question("q1", vec![answer("q1-a", 2, 2), answer("q1-n", 0, 0)]),
            question("q2", vec![answer("q2-a", -2, 1)]),
            question("q3", vec![answer("q3-a", 1, -2)]),
        ])
        .unwrap()
    }

    // Validation tests

    #[test]
    fn rejects_empty_bank() {
        assert_eq!(QuestionBank::new(vec![]), Err(QuestionBankError::Empty));
    }

    #[test]
    fn rejects_question_without_answers() {
        let result = QuestionBank::new(vec![question("q1", vec![])]);
        assert_eq!(result, Err(QuestionBankError::NoAnswers(qid("q1"))));
    }

    #[test]
    fn rejects_duplicate_question_ids() {
        let result = QuestionBank::new(vec![
            question("q1", vec![answer("a", 0, 0)]),
            question("q1", vec![answer("b", 0, 0)]),
        ]);
        assert_eq!(result, Err(QuestionBankError::DuplicateQuestionId(qid("q1"))));
    }

    #[test]
    fn rejects_answer_ids_shared_across_questions() {
        let result = QuestionBank::new(vec![
            question("q1", vec![answer("shared", 1, 0)]),
            question("q2", vec![answer("shared", -1, 0)]),
        ]);
        assert!(matches!(result, Err(QuestionBankError::DuplicateAnswerId(_))));
    }

    #[test]
    fn rejects_weights_outside_range() {
        let result = QuestionBank::new(vec![question("q1", vec![answer("q1-a", 0, 3)])]);
        match result {
            Err(QuestionBankError::WeightOutOfRange {
                dimension, weight, ..
            }) => {
                assert_eq!(dimension, Dimension::Temperament);
                assert_eq!(weight, 3);
            }
            other => panic!("Expected WeightOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn rejects_blank_question_text() {
        let q = Question::new(qid("q1"), "  ", Dimension::Tactics, vec![answer("a", 0, 0)]);
        assert!(matches!(
            QuestionBank::new(vec![q]),
            Err(QuestionBankError::BlankField(_))
        ));
    }

    #[test]
    fn accepts_boundary_weights() {
        let bank = QuestionBank::new(vec![question(
            "q1",
            vec![answer("lo", -2, -2), answer("hi", 2, 2)],
        )]);
        assert!(bank.is_ok());
    }

    // Sequencing tests

    #[test]
    fn next_unanswered_follows_bank_order() {
        let bank = three_question_bank();
        let mut answered = HashSet::new();

        assert_eq!(bank.next_unanswered(&answered).unwrap().id, qid("q1"));

        answered.insert(qid("q1"));
        assert_eq!(bank.next_unanswered(&answered).unwrap().id, qid("q2"));
    }

    #[test]
    fn next_unanswered_skips_out_of_order_answers() {
        let bank = three_question_bank();
        let answered: HashSet<_> = [qid("q2")].into_iter().collect();

        assert_eq!(bank.next_unanswered(&answered).unwrap().id, qid("q1"));
        assert_eq!(bank.remaining(&answered), 2);
    }

    #[test]
    fn next_unanswered_is_none_when_all_answered() {
        let bank = three_question_bank();
        let answered: HashSet<_> = bank.iter().map(|q| q.id.clone()).collect();

        assert!(bank.next_unanswered(&answered).is_none());
        assert_eq!(bank.remaining(&answered), 0);
    }

    #[test]
    fn question_lookup_by_id() {
        let bank = three_question_bank();
        assert_eq!(bank.question(&qid("q3")).unwrap().answers.len(), 1);
        assert!(bank.question(&qid("nope")).is_none());
        assert!(bank.contains(&qid("q2")));
    }

    // Loader tests

    #[test]
    fn loads_from_json_array() {
        let json = r#"[
            {"id": "q1", "text": "First?", "dimension": "dim_a",
             "answers": [{"id": "q1-a", "text": "Yes", "weight_a": 2, "weight_b": -1}]}
        ]"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.iter().next().unwrap().dimension, Dimension::Tactics);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = QuestionBank::from_json_str("{not json");
        assert!(matches!(result, Err(QuestionBankError::Parse(_))));
    }

    #[test]
    fn loaded_banks_are_validated() {
        let yaml = r#"
- id: q1
  text: "Out of range"
  dimension: temperament
  answers:
    - id: q1-a
      text: "Too strong"
      weight_a: -5
"#;
        let result = QuestionBank::from_yaml_str(yaml);
        assert!(matches!(result, Err(QuestionBankError::WeightOutOfRange { .. })));
    }

    #[test]
    fn builtin_bank_is_valid_and_shared() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 10);
        assert!(Arc::ptr_eq(&bank, &QuestionBank::builtin()));
        assert_eq!(bank.iter().next().unwrap().id.as_str(), "opening-choice");
    }

    #[test]
    fn bank_error_converts_to_domain_error() {
        let err: DomainError = QuestionBankError::Empty.into();
        assert_eq!(err.code, ErrorCode::InvalidQuestionBank);
    }
}
