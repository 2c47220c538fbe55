//! Error types for editor integration

use copcomplete_cache::CacheError;
use copcomplete_completion::CompletionError;
use thiserror::Error;

/// Editor integration error
#[derive(Debug, Error)]
pub enum IdeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration validation error
    #[error("Configuration validation error: {0}")]
    ConfigValidationError(String),

    /// Path resolution error
    #[error("Path resolution error: {0}")]
    PathResolutionError(String),

    /// Malformed request from the host
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Registry loading error
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

impl IdeError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        IdeError::ConfigError(message.into())
    }

    /// Create a configuration validation error
    pub fn config_validation_error(message: impl Into<String>) -> Self {
        IdeError::ConfigValidationError(message.into())
    }

    /// Create a path resolution error
    pub fn path_resolution_error(message: impl Into<String>) -> Self {
        IdeError::PathResolutionError(message.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        IdeError::InvalidRequest(message.into())
    }
}

/// Result type for editor integration operations
pub type IdeResult<T> = Result<T, IdeError>;
