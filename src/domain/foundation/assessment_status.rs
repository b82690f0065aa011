//! AssessmentStatus enum for tracking the lifecycle of an assessment run.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of an assessment session.
///
/// `NotStarted -> InProgress -> Completed`. A session may also jump from
/// `NotStarted` straight to `Completed` when its very first answer already
/// satisfies the termination policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    /// Returns true if responses may still be recorded.
    pub fn accepts_answers(&self) -> bool {
        !matches!(self, AssessmentStatus::Completed)
    }
}

impl StateMachine for AssessmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStatus::*;
        matches!(
            (self, target),
            (NotStarted, InProgress) | (NotStarted, Completed) | (InProgress, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStatus::*;
        match self {
            NotStarted => vec![InProgress, Completed],
            InProgress => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentStatus::NotStarted => "Not Started",
            AssessmentStatus::InProgress => "In Progress",
            AssessmentStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_started() {
        assert_eq!(AssessmentStatus::default(), AssessmentStatus::NotStarted);
    }

    #[test]
    fn only_completed_rejects_answers() {
        assert!(AssessmentStatus::NotStarted.accepts_answers());
        assert!(AssessmentStatus::InProgress.accepts_answers());
        assert!(!AssessmentStatus::Completed.accepts_answers());
    }

    #[test]
    fn not_started_can_start_or_complete() {
        assert!(AssessmentStatus::NotStarted.can_transition_to(&AssessmentStatus::InProgress));
        assert!(AssessmentStatus::NotStarted.can_transition_to(&AssessmentStatus::Completed));
    }

    #[test]
    fn in_progress_cannot_go_back() {
        assert!(!AssessmentStatus::InProgress.can_transition_to(&AssessmentStatus::NotStarted));
        assert!(AssessmentStatus::InProgress
            .transition_to(AssessmentStatus::NotStarted)
            .is_err());
    }

    #[test]
    fn completed_is_terminal() {
        assert!(AssessmentStatus::Completed.is_terminal());
        assert!(!AssessmentStatus::InProgress.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        use AssessmentStatus::*;
        for status in [NotStarted, InProgress, Completed] {
            for target in [NotStarted, InProgress, Completed] {
                assert_eq!(
                    status.can_transition_to(&target),
                    status.valid_transitions().contains(&target),
                    "{:?} -> {:?}",
                    status,
                    target
                );
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&AssessmentStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: AssessmentStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, AssessmentStatus::Completed);
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", AssessmentStatus::NotStarted), "Not Started");
    }
}
