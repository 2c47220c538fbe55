//! Error types for the completion crate

use copcomplete_cache::CacheError;
use thiserror::Error;

/// Completion and registry errors
#[derive(Debug, Error)]
pub enum CompletionError {
    /// RuboCop printed something that is not YAML
    #[error("Failed to decode cop list: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Cache lookup or write failed
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Result type for completion operations
pub type CompletionResult<T> = Result<T, CompletionError>;
