//! Form submission use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{FormDraft, ServiceConfig, SubmissionRecord};
use crate::domain::errors::SubmissionError;
use crate::domain::ports::{Clock, IdGenerator, SubmissionPort, SubmissionRequest};

/// Turns a completed draft into a synthetic receipt.
#[derive(Clone)]
pub struct SubmitFormUseCase {
    submission_port: Arc<dyn SubmissionPort>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl SubmitFormUseCase {
    /// Creates new submit use case.
    #[must_use]
    pub const fn new(
        submission_port: Arc<dyn SubmissionPort>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            submission_port,
            id_generator,
            clock,
        }
    }

    /// Validates the draft, submits it and builds the record.
    ///
    /// # Errors
    /// Returns error if a required field is missing or the collaborator refuses.
    pub async fn execute(
        &self,
        config: &ServiceConfig,
        draft: &FormDraft,
    ) -> Result<SubmissionRecord, SubmissionError> {
        debug!(service = ?config.kind, "Submitting form");

        draft.validate(config.fields).map_err(|e| {
            warn!(service = ?config.kind, error = %e, "Draft failed validation");
            e
        })?;

        let reference = self.id_generator.next_id(config.id_prefix);
        let request = SubmissionRequest::new(
            config.kind,
            config.collaborator,
            reference.clone(),
            draft.clone(),
        );

        let receipt = self.submission_port.submit(&request).await.map_err(|e| {
            warn!(service = ?config.kind, error = %e, "Collaborator refused submission");
            e
        })?;

        info!(
            service = ?config.kind,
            reference = %reference,
            provider = %receipt.provider,
            "Submission accepted"
        );

        Ok(SubmissionRecord {
            id: reference,
            service: config.kind,
            values: draft.clone(),
            date: self.clock.today(),
            provider: receipt.provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ServiceKind;
    use crate::domain::errors::ValidationError;
    use crate::domain::ports::Receipt;
    use crate::domain::ports::mocks::{FixedClock, MockSubmissionPort, SequentialIdGenerator};
    use tokio_test::{assert_err, assert_ok};

    fn use_case(port: MockSubmissionPort) -> SubmitFormUseCase {
        SubmitFormUseCase::new(
            Arc::new(port),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(FixedClock::ymd(2026, 10, 19)),
        )
    }

    fn accepting_port() -> MockSubmissionPort {
        let mut port = MockSubmissionPort::new();
        port.expect_submit().returning(|request| {
            Ok(Receipt {
                reference: request.reference.clone(),
                provider: request.collaborator.name().to_string(),
            })
        });
        port
    }

    fn transfer_draft() -> FormDraft {
        let config = ServiceKind::LocalTransfer.config();
        let mut draft = FormDraft::for_fields(config.fields);
        draft.set("recipient_name", "Jane Knowles");
        draft.set("recipient_account", "jane@example.com");
        draft.set("amount", "200");
        draft
    }

    #[tokio::test]
    async fn test_record_echoes_draft() {
        let config = ServiceKind::LocalTransfer.config();
        let draft = transfer_draft();

        let record = assert_ok!(use_case(accepting_port()).execute(config, &draft).await);

        assert_eq!(record.id, "TRF-000001");
        assert_eq!(record.values, draft);
        assert_eq!(record.formatted_date(), "Oct 19, 2026");
        assert_eq!(record.provider, "Bahamas Payments Network");

        let text = record.render(config.confirmation);
        assert!(text.contains("$200"));
        assert!(text.contains("jane@example.com"));
    }

    #[tokio::test]
    async fn test_ids_are_sequential_per_use_case() {
        let config = ServiceKind::LocalTransfer.config();
        let use_case = use_case(accepting_port());

        let first = use_case.execute(config, &transfer_draft()).await.unwrap();
        let second = use_case.execute(config, &transfer_draft()).await.unwrap();

        assert_eq!(first.id, "TRF-000001");
        assert_eq!(second.id, "TRF-000002");
    }

    #[tokio::test]
    async fn test_missing_field_never_reaches_port() {
        let config = ServiceKind::BplPayment.config();
        let mut draft = FormDraft::for_fields(config.fields);
        draft.set("bill_type", "Electricity");
        draft.set("account_number", "12345");

        let mut port = MockSubmissionPort::new();
        port.expect_submit().never();

        let err = assert_err!(use_case(port).execute(config, &draft).await);
        assert_eq!(
            err,
            SubmissionError::Validation(ValidationError::missing("Amount"))
        );
    }

    #[tokio::test]
    async fn test_collaborator_rejection_propagates() {
        let config = ServiceKind::LocalTransfer.config();

        let mut port = MockSubmissionPort::new();
        port.expect_submit()
            .times(1)
            .returning(|_| Err(SubmissionError::rejected("insufficient funds")));

        let err = assert_err!(use_case(port).execute(config, &transfer_draft()).await);
        assert!(matches!(err, SubmissionError::Rejected { .. }));
    }
}
