//! Form validation error types.

use thiserror::Error;

/// Field validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: String },

    #[error("{field} is invalid: {reason}")]
    Malformed { field: String, reason: String },
}

impl ValidationError {
    /// Creates missing field error.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates malformed field error.
    #[must_use]
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::missing("Amount").to_string(),
            "Amount is required"
        );
        assert_eq!(
            ValidationError::malformed("Island", "unknown").to_string(),
            "Island is invalid: unknown"
        );
    }
}
