//! Submission error types.

use thiserror::Error;

use super::ValidationError;
use crate::domain::entities::Collaborator;

/// Failures reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum SubmissionError {
    #[error("request rejected: {message}")]
    Rejected { message: String },

    #[error("{collaborator} is unavailable")]
    Unavailable { collaborator: Collaborator },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SubmissionError {
    /// Creates rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Returns whether retrying the same draft could succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
