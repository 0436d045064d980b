//! Error Types
//!
//! Storage, validation and startup errors.

use thiserror::Error;

use crate::notify::NotificationKind;

/// Errors raised by the key-value store layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("stored value under `{key}` is not valid JSON")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected user input. The message is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Digite uma tarefa!")]
    EmptyTaskText,
    #[error("Preencha todos os campos!")]
    MissingListFields,
}

impl ValidationError {
    pub fn kind(&self) -> NotificationKind {
        match self {
            ValidationError::EmptyTaskText => NotificationKind::Warning,
            ValidationError::MissingListFields => NotificationKind::Error,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("required element `#{0}` not found in the page")]
    MissingElement(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;
