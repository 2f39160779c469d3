//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is present but empty
    Empty { field: &'static str },

    /// Required field is absent
    Missing { field: &'static str },

    /// Value can't be parsed into the expected shape
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::Missing { field } | Self::InvalidFormat { field, .. } => {
                field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "start_time",
            reason: "expected YYYY-MM-DD HH:MM:SS",
        };
        assert_eq!(err.to_string(), "start_time: expected YYYY-MM-DD HH:MM:SS");
        assert_eq!(
            ValidationError::Missing { field: "answer" }.to_string(),
            "answer is required"
        );
    }

    #[test]
    fn field_accessor() {
        assert_eq!(ValidationError::Empty { field: "question" }.field(), "question");
    }
}
