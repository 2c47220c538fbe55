//! Cache-related error types

use thiserror::Error;

/// Cache operation errors
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Deserialization error for {key}: {message}")]
    Deserialization { key: String, message: String },

    #[error("Invalid cache key: {key}")]
    InvalidKey { key: String },

    #[error("Failed to read governing file {path}: {source}")]
    GoverningFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Re-export commonly used Result type
pub type Result<T> = std::result::Result<T, CacheError>;
