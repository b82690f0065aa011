//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError as SettingError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid engine setting: {0}")]
    InvalidEngineSetting(#[from] SettingError),

    #[error("Profile directory must not be empty")]
    EmptyProfileDir,

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
