//! Submission port definition.

use async_trait::async_trait;

use crate::domain::entities::{Collaborator, FormDraft, ServiceKind};
use crate::domain::errors::SubmissionError;

/// Request handed to an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Originating service.
    pub service: ServiceKind,
    /// Collaborator expected to process the request.
    pub collaborator: Collaborator,
    /// Synthetic reference assigned before submission.
    pub reference: String,
    /// Frozen field values.
    pub fields: FormDraft,
}

impl SubmissionRequest {
    /// Creates new submission request.
    #[must_use]
    pub const fn new(
        service: ServiceKind,
        collaborator: Collaborator,
        reference: String,
        fields: FormDraft,
    ) -> Self {
        Self {
            service,
            collaborator,
            reference,
            fields,
        }
    }
}

/// Acknowledgement returned by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Reference echoed by the collaborator.
    pub reference: String,
    /// Name of the processing provider.
    pub provider: String,
}

/// Port for payment, transfer and government service submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    /// Submits a request and returns the collaborator's receipt.
    async fn submit(&self, request: &SubmissionRequest) -> Result<Receipt, SubmissionError>;
}
