//! Error types for process invocation

use std::io;
use thiserror::Error;

/// Process invocation errors
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[from] io::Error),

    /// Process timed out
    #[error("Process timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Invalid configuration
    #[error("Invalid process configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for process operations
pub type Result<T> = std::result::Result<T, ProcessError>;
