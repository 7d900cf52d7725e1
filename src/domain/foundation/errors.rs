//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while validating domain records at the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing {0}")]
    Missing(String),

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a missing value validation error.
    pub fn missing(what: impl Into<String>) -> Self {
        ValidationError::Missing(what.into())
    }

    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_missing_displays_correctly() {
        let err = ValidationError::missing("garment data");
        assert_eq!(format!("{}", err), "Missing garment data");
    }

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("garment_a.name");
        assert_eq!(format!("{}", err), "Field 'garment_a.name' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("garment_b", "expected a JSON object");
        assert_eq!(
            format!("{}", err),
            "Field 'garment_b' has invalid format: expected a JSON object"
        );
    }
}
