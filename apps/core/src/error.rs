use std::io;
use thiserror::Error;

/// Application-wide error type.
///
/// The classification engine itself never fails; these cover the layers
/// around it (input validation, configuration, catalog loading).
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., empty complaint title).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unknown log format).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents malformed JSON input, such as a department catalog file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
