//! SaveResult - Command handler for persisting a finished assessment.

use std::sync::Arc;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scoring::ArchetypeResult;
use crate::ports::PlayerProfileStore;

/// Handler for saving the result of a completed session.
pub struct SaveResultHandler {
    store: Arc<dyn PlayerProfileStore>,
}

impl SaveResultHandler {
    pub fn new(store: Arc<dyn PlayerProfileStore>) -> Self {
        Self { store }
    }

    /// Saves the session's result and returns what was stored.
    pub async fn handle(&self, session: &AssessmentSession) -> Result<ArchetypeResult, DomainError> {
        let result = session.result().ok_or_else(|| {
            DomainError::new(
                ErrorCode::AssessmentIncomplete,
                "Assessment must be complete before its result can be saved",
            )
            .with_detail("status", session.status().to_string())
            .with_detail("responses", session.response_count().to_string())
        })?;

        self.store.save(result).await?;

        tracing::info!(
            assessment_id = %session.id(),
            archetype = %result.archetype,
            confidence = result.confidence.value(),
            "Saved assessment result"
        );

        Ok(result.clone())
    }
}
