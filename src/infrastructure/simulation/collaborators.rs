//! Simulated external collaborators.

use async_trait::async_trait;
use tracing::info;

use crate::domain::errors::SubmissionError;
use crate::domain::ports::{Receipt, SubmissionPort, SubmissionRequest};

/// Stand-in for the payment gateway, transfer network and government portal.
///
/// Every request succeeds immediately.
#[derive(Debug, Default, Clone)]
pub struct SimulatedCollaborators;

impl SimulatedCollaborators {
    /// Creates new simulated collaborators.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionPort for SimulatedCollaborators {
    async fn submit(&self, request: &SubmissionRequest) -> Result<Receipt, SubmissionError> {
        info!(
            collaborator = %request.collaborator,
            service = ?request.service,
            reference = %request.reference,
            "Simulated submission accepted"
        );

        Ok(Receipt {
            reference: request.reference.clone(),
            provider: request.collaborator.name().to_string(),
        })
    }
}
