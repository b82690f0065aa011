//! ClearProfile - Command handler for forgetting the saved profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::PlayerProfileStore;

/// Handler for removing the saved profile. Succeeds when nothing is saved.
pub struct ClearProfileHandler {
    store: Arc<dyn PlayerProfileStore>,
}

impl ClearProfileHandler {
    pub fn new(store: Arc<dyn PlayerProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<(), DomainError> {
        self.store.clear().await?;
        tracing::info!("Cleared player profile");
        Ok(())
    }
}
