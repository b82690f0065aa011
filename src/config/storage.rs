//! Profile storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the player profile is kept
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `profile.json`
    #[serde(default = "default_profile_dir")]
    pub profile_dir: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profile_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyProfileDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profile_dir: default_profile_dir(),
        }
    }
}

fn default_profile_dir() -> PathBuf {
    PathBuf::from("./data")
}
