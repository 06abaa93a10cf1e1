//! Error types for invoicing-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Conflict: {0}")]
    Conflict(anyhow::Error),

    #[error("Storage error: {0}")]
    StorageError(anyhow::Error),
}

impl AppError {
    /// Field-level validation failure for a single invoice operation.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            reason: reason.into(),
        }
    }
}
