// CLI error types

use copcomplete_ide::IdeError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Editor integration error: {0}")]
    Ide(#[from] IdeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'copcomplete --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Ide(IdeError::ConfigError(msg) | IdeError::ConfigValidationError(msg)) => {
                format!(
                    "Configuration error: {}\n\nCheck the settings file passed with --config.",
                    msg
                )
            }
            CliError::Ide(e) => {
                format!("{}\n\nRun with --debug for details.", e)
            }
            CliError::Serialization(e) => {
                format!("Failed to encode output: {}", e)
            }
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }

    /// Get technical details for debug mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;
