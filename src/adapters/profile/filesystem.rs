//! Filesystem adapter for the player profile store.
//!
//! Writes one JSON document per store directory. The serialized profile is
//! wrapped in an envelope carrying its SHA-256 checksum so that truncated
//! or hand-edited files are detected on load.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::Timestamp;
use crate::domain::scoring::ArchetypeResult;
use crate::ports::{PlayerProfileStore, ProfileStoreError, StoredProfile};

const PROFILE_FILE_NAME: &str = "profile.json";

#[derive(Debug, Serialize, Deserialize)]
struct ProfileEnvelope {
    checksum: String,
    payload: String,
}

/// Filesystem-based profile storage
///
/// Stores the profile at `{base_dir}/profile.json`.
#[derive(Debug, Clone)]
pub struct FsProfileStore {
    base_dir: PathBuf,
}

impl FsProfileStore {
    /// Create new filesystem storage with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Full path of the profile document.
    pub fn profile_path(&self) -> PathBuf {
        self.base_dir.join(PROFILE_FILE_NAME)
    }

    fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn map_io(context: &str, e: std::io::Error) -> ProfileStoreError {
        if e.kind() == ErrorKind::PermissionDenied {
            ProfileStoreError::PermissionDenied(format!("{}: {}", context, e))
        } else {
            ProfileStoreError::Io(format!("{}: {}", context, e))
        }
    }

    fn decode(raw: &str) -> Result<StoredProfile, ProfileStoreError> {
        let envelope: ProfileEnvelope = serde_json::from_str(raw)
            .map_err(|e| ProfileStoreError::Corrupted(format!("unreadable envelope: {}", e)))?;

        let actual = Self::compute_checksum(&envelope.payload);
        if actual != envelope.checksum {
            return Err(ProfileStoreError::Corrupted(format!(
                "checksum mismatch: expected {}, got {}",
                envelope.checksum, actual
            )));
        }

        serde_json::from_str(&envelope.payload)
            .map_err(|e| ProfileStoreError::Corrupted(format!("unreadable profile: {}", e)))
    }
}

#[async_trait]
impl PlayerProfileStore for FsProfileStore {
    async fn save(&self, result: &ArchetypeResult) -> Result<(), ProfileStoreError> {
        let profile = StoredProfile::new(result.clone(), Timestamp::now());
        let payload = serde_json::to_string(&profile)
            .map_err(|e| ProfileStoreError::Serialization(e.to_string()))?;
        let envelope = ProfileEnvelope {
            checksum: Self::compute_checksum(&payload),
            payload,
        };
        let document = serde_json::to_string_pretty(&envelope)
            .map_err(|e| ProfileStoreError::Serialization(e.to_string()))?;

        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| Self::map_io("Failed to create directory", e))?;

        // Write to a temporary file, then rename into place (atomic on Unix)
        let file_path = self.profile_path();
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, document)
            .await
            .map_err(|e| Self::map_io("Failed to write temporary file", e))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| Self::map_io("Failed to rename file", e))?;

        tracing::debug!(path = %file_path.display(), archetype = %result.archetype, "Saved profile");
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredProfile>, ProfileStoreError> {
        let file_path = self.profile_path();
        let raw = match fs::read_to_string(&file_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::map_io("Failed to read file", e)),
        };

        Self::decode(&raw).map(Some)
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        match fs::remove_file(self.profile_path()).await {
            Ok(()) => Ok(()),
            // Not an error - idempotent delete
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::map_io("Failed to delete file", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{ArchetypeClassifier, ConfidenceEstimator, ScoreTotals};
    use tempfile::TempDir;

    fn test_result() -> ArchetypeResult {
        ArchetypeResult::compute(
            ScoreTotals::new(-8, -6),
            6,
            &ConfidenceEstimator::default(),
            &ArchetypeClassifier::default(),
        )
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path());

        store.save(&test_result()).await.unwrap();
        assert!(store.profile_path().exists());

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.result, test_result());
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path().join("never-created"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_previous() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path());
        let newer = ArchetypeResult::compute(
            ScoreTotals::new(9, 9),
            5,
            &ConfidenceEstimator::default(),
            &ArchetypeClassifier::default(),
        );

        store.save(&test_result()).await.unwrap();
        store.save(&newer).await.unwrap();

        assert_eq!(store.load().await.unwrap().unwrap().result, newer);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path());

        store.save(&test_result()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_garbage_file_is_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path());
        std::fs::write(store.profile_path(), "{ this is not json").unwrap();

        let result = store.load().await;
        assert!(matches!(result, Err(ProfileStoreError::Corrupted(_))));
    }

    #[tokio::test]
    async fn test_tampered_payload_fails_checksum() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path());
        store.save(&test_result()).await.unwrap();

        let raw = std::fs::read_to_string(store.profile_path()).unwrap();
        let mut envelope: ProfileEnvelope = serde_json::from_str(&raw).unwrap();
        envelope.payload = envelope.payload.replace("strategist", "attacker");
        std::fs::write(
            store.profile_path(),
            serde_json::to_string(&envelope).unwrap(),
        )
        .unwrap();

        match store.load().await {
            Err(ProfileStoreError::Corrupted(msg)) => assert!(msg.contains("checksum mismatch")),
            other => panic!("Expected checksum failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_is_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsProfileStore::new(temp_dir.path());

        let mut profile =
            serde_json::to_value(StoredProfile::new(test_result(), Timestamp::now())).unwrap();
        profile["result"]["confidence"] = serde_json::json!(250);
        let payload = profile.to_string();
        let envelope = ProfileEnvelope {
            checksum: FsProfileStore::compute_checksum(&payload),
            payload,
        };
        std::fs::write(
            store.profile_path(),
            serde_json::to_string(&envelope).unwrap(),
        )
        .unwrap();

        match store.load().await {
            Err(ProfileStoreError::Corrupted(msg)) => assert!(msg.contains("unreadable profile")),
            other => panic!("Expected corrupted profile, got {:?}", other),
        }
    }

    #[test]
    fn test_compute_checksum_is_stable() {
        let a = FsProfileStore::compute_checksum("profile");
        let b = FsProfileStore::compute_checksum("profile");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, FsProfileStore::compute_checksum("profile!"));
    }
}
