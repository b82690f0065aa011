//! PlayerProfileStore port for persisting finalized assessment results.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::scoring::ArchetypeResult;

/// A saved result together with when it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub result: ArchetypeResult,
    pub saved_at: Timestamp,
}

impl StoredProfile {
    pub fn new(result: ArchetypeResult, saved_at: Timestamp) -> Self {
        Self { result, saved_at }
    }
}

/// Errors that can occur during profile persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileStoreError {
    /// Stored data exists but cannot be trusted.
    #[error("Stored profile is corrupted: {0}")]
    Corrupted(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Failed to serialize profile: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<ProfileStoreError> for DomainError {
    fn from(err: ProfileStoreError) -> Self {
        let code = match err {
            ProfileStoreError::Corrupted(_) => ErrorCode::ProfileCorrupted,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Persistence for the player's most recent assessment result.
///
/// Consumed by the host, never by the assessment engine itself.
#[async_trait]
pub trait PlayerProfileStore: Send + Sync {
    /// Save a result, replacing any previous one.
    async fn save(&self, result: &ArchetypeResult) -> Result<(), ProfileStoreError>;

    /// Load the saved profile, `Ok(None)` if nothing was saved.
    ///
    /// Implementations report unreadable data as `Corrupted`.
    async fn load(&self) -> Result<Option<StoredProfile>, ProfileStoreError>;

    /// Remove the saved profile. Idempotent.
    async fn clear(&self) -> Result<(), ProfileStoreError>;
}
