//! Error types for assistant

use thiserror::Error;

/// Main error type for the assistant application
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("{kind} {id} not found")]
    RecordNotFound { kind: &'static str, id: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

impl AssistantError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AssistantError::RecordNotFound { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type using AssistantError
pub type Result<T> = std::result::Result<T, AssistantError>;
