//! Validation error types shared across the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction and input validation.
///
/// The message of the first offending field is what reaches the API caller,
/// so messages are written for end users, not operators.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("{message}")]
    Field { field: String, message: String },
}

impl ValidationError {
    /// Creates a validation error for a specific field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an empty-field validation error.
    pub fn empty(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} cannot be empty", capitalize(&field));
        ValidationError::Field { field, message }
    }

    /// Returns the name of the offending field.
    pub fn field_name(&self) -> &str {
        match self {
            ValidationError::Field { field, .. } => field,
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
