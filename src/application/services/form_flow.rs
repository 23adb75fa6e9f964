//! Generic editing → submitting → confirmed → editing state machine.

use tracing::debug;

use crate::domain::entities::{FieldSpec, FormDraft, ServiceConfig, SubmissionRecord};
use crate::domain::errors::SubmissionError;

/// Phase of a form flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowPhase {
    /// Fields are editable.
    Editing,
    /// Draft handed to the collaborator.
    Submitting,
    /// Receipt on screen until the reset fires.
    Confirmed(SubmissionRecord),
}

/// One service screen's form state.
#[derive(Debug, Clone)]
pub struct FormFlow {
    config: &'static ServiceConfig,
    draft: FormDraft,
    phase: FlowPhase,
    last_error: Option<SubmissionError>,
}

impl FormFlow {
    /// Creates an empty flow for a service.
    #[must_use]
    pub fn new(config: &'static ServiceConfig) -> Self {
        Self {
            config,
            draft: FormDraft::for_fields(config.fields),
            phase: FlowPhase::Editing,
            last_error: None,
        }
    }

    /// Returns service configuration.
    #[must_use]
    pub const fn config(&self) -> &'static ServiceConfig {
        self.config
    }

    /// Returns declared fields.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.config.fields
    }

    /// Returns current draft.
    #[must_use]
    pub const fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Returns current phase.
    #[must_use]
    pub const fn phase(&self) -> &FlowPhase {
        &self.phase
    }

    /// Returns whether fields accept input.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.phase, FlowPhase::Editing)
    }

    /// Returns error from the last failed submission.
    #[must_use]
    pub const fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    /// Updates a field. Ignored outside the editing phase.
    pub fn set_field(&mut self, key: &'static str, value: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.draft.set(key, value);
        self.last_error = None;
        true
    }

    /// Returns whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_editing() && self.missing_field().is_none()
    }

    /// Returns the first required field still empty.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static FieldSpec> {
        self.draft.first_missing(self.config.fields)
    }

    /// Freezes the draft and enters the submitting phase.
    ///
    /// Returns `None` when the submit control is disabled.
    pub fn begin_submit(&mut self) -> Option<FormDraft> {
        if !self.can_submit() {
            return None;
        }
        self.phase = FlowPhase::Submitting;
        Some(self.draft.clone())
    }

    /// Shows the receipt.
    pub fn confirm(&mut self, record: SubmissionRecord) {
        if matches!(self.phase, FlowPhase::Submitting) {
            debug!(service = ?self.config.kind, id = %record.id, "Form confirmed");
            self.phase = FlowPhase::Confirmed(record);
        }
    }

    /// Returns to editing with the draft intact.
    pub fn fail(&mut self, error: &SubmissionError) {
        if matches!(self.phase, FlowPhase::Submitting) {
            self.phase = FlowPhase::Editing;
            self.last_error = Some(error.clone());
        }
    }

    /// Clears the form after a confirmation. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        if !matches!(self.phase, FlowPhase::Confirmed(_)) {
            return false;
        }
        debug!(service = ?self.config.kind, "Form reset");
        self.draft.clear();
        self.phase = FlowPhase::Editing;
        self.last_error = None;
        true
    }

    /// Returns the rendered confirmation copy while confirmed.
    #[must_use]
    pub fn confirmation_text(&self) -> Option<String> {
        match &self.phase {
            FlowPhase::Confirmed(record) => Some(record.render(self.config.confirmation)),
            FlowPhase::Editing | FlowPhase::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ServiceKind;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn record_for(flow: &FormFlow) -> SubmissionRecord {
        SubmissionRecord {
            id: format!("{}-1", flow.config().id_prefix),
            service: flow.config().kind,
            values: flow.draft().clone(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            provider: flow.config().collaborator.name().to_string(),
        }
    }

    fn bpl(bill_type: &str, account: &str, amount: &str) -> FormFlow {
        let mut flow = FormFlow::new(ServiceKind::BplPayment.config());
        flow.set_field("bill_type", bill_type);
        flow.set_field("account_number", account);
        flow.set_field("amount", amount);
        flow
    }

    #[test_case("Electricity", "12345", "", false ; "amount_empty")]
    #[test_case("Electricity", "12345", "75.00", true ; "all_filled")]
    #[test_case("Electricity", "", "75.00", false ; "account_empty")]
    #[test_case("", "12345", "75.00", false ; "bill_type_empty")]
    #[test_case("Electricity", "12345", "seventy", true ; "amount_not_format_checked")]
    #[test_case("Electricity", "12345", "   ", true ; "amount_whitespace_is_present")]
    fn test_submit_enabled_iff_required_present(
        bill_type: &str,
        account: &str,
        amount: &str,
        enabled: bool,
    ) {
        assert_eq!(bpl(bill_type, account, amount).can_submit(), enabled);
    }

    #[test]
    fn test_begin_submit_disabled_returns_none() {
        let mut flow = bpl("Electricity", "12345", "");
        assert!(flow.begin_submit().is_none());
        assert!(flow.is_editing());
    }

    #[test]
    fn test_full_cycle() {
        let mut flow = FormFlow::new(ServiceKind::LocalTransfer.config());
        flow.set_field("recipient_name", "Jane Knowles");
        flow.set_field("recipient_account", "jane@example.com");
        flow.set_field("amount", "200");

        let frozen = flow.begin_submit().unwrap();
        assert_eq!(flow.phase(), &FlowPhase::Submitting);
        assert!(!flow.set_field("amount", "999"));
        assert_eq!(frozen.get("amount"), "200");

        let record = record_for(&flow);
        flow.confirm(record);

        let text = flow.confirmation_text().unwrap();
        assert!(text.contains("$200"));
        assert!(text.contains("jane@example.com"));
        assert!(!flow.can_submit());

        assert!(flow.reset());
        assert!(flow.is_editing());
        assert!(flow.draft().is_empty());
        assert!(flow.confirmation_text().is_none());
    }

    #[test]
    fn test_reset_only_from_confirmed() {
        let mut flow = bpl("Electricity", "12345", "75.00");
        assert!(!flow.reset());
        assert_eq!(flow.draft().get("amount"), "75.00");

        flow.begin_submit();
        assert!(!flow.reset());
        assert_eq!(flow.phase(), &FlowPhase::Submitting);
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut flow = bpl("Electricity", "12345", "75.00");
        flow.begin_submit();
        flow.fail(&SubmissionError::rejected("card declined"));

        assert!(flow.is_editing());
        assert_eq!(flow.draft().get("account_number"), "12345");
        assert_eq!(
            flow.last_error(),
            Some(&SubmissionError::rejected("card declined"))
        );

        flow.set_field("amount", "80.00");
        assert!(flow.last_error().is_none());
    }

    #[test]
    fn test_confirm_outside_submitting_ignored() {
        let mut flow = bpl("Electricity", "12345", "75.00");
        let record = record_for(&flow);
        flow.confirm(record);
        assert!(flow.is_editing());
    }

    #[test]
    fn test_missing_field_reports_first_in_order() {
        let flow = bpl("", "", "");
        assert_eq!(flow.missing_field().map(|f| f.key), Some("bill_type"));
    }
}
