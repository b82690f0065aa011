//! LoadProfile - Query handler for the saved player profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{PlayerProfileStore, ProfileStoreError, StoredProfile};

/// Handler for reading the saved profile.
///
/// A corrupted profile is treated as absent so the player can simply take
/// the assessment again.
pub struct LoadProfileHandler {
    store: Arc<dyn PlayerProfileStore>,
}

impl LoadProfileHandler {
    pub fn new(store: Arc<dyn PlayerProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Option<StoredProfile>, DomainError> {
        match self.store.load().await {
            Ok(profile) => Ok(profile),
            Err(ProfileStoreError::Corrupted(reason)) => {
                tracing::warn!(reason = %reason, "Ignoring corrupted player profile");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
