//! Error type for case operations.

use thiserror::Error;

use crate::domain::foundation::{CaseId, ValidationError};

/// Errors surfaced by case and intake operations.
///
/// The `Display` text of each variant is the human-readable message the API
/// returns; infrastructure and generation details are logged but never shown.
/// Ownership mismatches map to `NotFound` on purpose - a caller must not be
/// able to confirm that another user's case exists.
#[derive(Debug, Clone, Error)]
pub enum CaseError {
    /// Input failed schema validation; carries the first offending field.
    #[error("{message}")]
    ValidationFailed { field: String, message: String },

    /// The session identity has no record in the user directory.
    #[error("User not found")]
    UserNotFound,

    /// The case does not exist, or is owned by a different user.
    #[error("Case not found")]
    NotFound(CaseId),

    /// The operation is not allowed in the case's current lifecycle state.
    #[error("{0}")]
    InvalidState(String),

    /// The AI gateway failed; the cause is kept for logs only.
    #[error("Failed to generate response")]
    Generation(String),

    /// Persistence or other unanticipated failure; cause kept for logs only.
    #[error("Internal server error")]
    Infrastructure(String),
}

impl CaseError {
    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CaseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid-state error with a caller-facing message.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        CaseError::InvalidState(message.into())
    }

    /// Creates a generation failure, retaining the cause for logging.
    pub fn generation(cause: impl Into<String>) -> Self {
        CaseError::Generation(cause.into())
    }

    /// Creates an infrastructure failure, retaining the cause for logging.
    pub fn infrastructure(cause: impl Into<String>) -> Self {
        CaseError::Infrastructure(cause.into())
    }
}

impl From<ValidationError> for CaseError {
    fn from(err: ValidationError) -> Self {
        CaseError::ValidationFailed {
            field: err.field_name().to_string(),
            message: err.to_string(),
        }
    }
}
