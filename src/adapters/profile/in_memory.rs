//! In-memory profile store.
//!
//! Useful for tests and for hosts that do not need the profile to survive a
//! restart. Thread-safe via internal `Mutex`.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::Timestamp;
use crate::domain::scoring::ArchetypeResult;
use crate::ports::{PlayerProfileStore, ProfileStoreError, StoredProfile};

/// In-memory implementation of the PlayerProfileStore port.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profile: Mutex<Option<StoredProfile>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a profile.
    pub fn with_profile(profile: StoredProfile) -> Self {
        Self {
            profile: Mutex::new(Some(profile)),
        }
    }

    fn slot(&self) -> Result<MutexGuard<'_, Option<StoredProfile>>, ProfileStoreError> {
        self.profile
            .lock()
            .map_err(|_| ProfileStoreError::Io("profile lock poisoned".to_string()))
    }
}

#[async_trait]
impl PlayerProfileStore for InMemoryProfileStore {
    async fn save(&self, result: &ArchetypeResult) -> Result<(), ProfileStoreError> {
        *self.slot()? = Some(StoredProfile::new(result.clone(), Timestamp::now()));
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredProfile>, ProfileStoreError> {
        Ok(self.slot()?.clone())
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        *self.slot()? = None;
        Ok(())
    }
}
