//! Form field declarations, drafts and synthetic receipts.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::view::ServiceKind;
use crate::domain::errors::ValidationError;

/// Input kind of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Monetary amount, shown with a currency prefix.
    Amount,
    /// Calendar date, free text.
    Date,
    /// One of a fixed set of options.
    Select(&'static [&'static str]),
}

/// Declared form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable key used in drafts and templates.
    pub key: &'static str,
    /// Human label.
    pub label: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Placeholder shown while empty.
    pub placeholder: &'static str,
    /// Whether submit requires a value.
    pub required: bool,
}

impl FieldSpec {
    /// Required free-text field.
    #[must_use]
    pub const fn text(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            placeholder,
            required: true,
        }
    }

    /// Required amount field.
    #[must_use]
    pub const fn amount(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Amount,
            placeholder: "0.00",
            required: true,
        }
    }

    /// Required date field.
    #[must_use]
    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Date,
            placeholder: "YYYY-MM-DD",
            required: true,
        }
    }

    /// Required select field.
    #[must_use]
    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Select(options),
            placeholder: "Select...",
            required: true,
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Values entered on one mounted screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: BTreeMap<&'static str, String>,
}

impl FormDraft {
    /// Creates an all-empty draft for the declared fields.
    #[must_use]
    pub fn for_fields(fields: &[FieldSpec]) -> Self {
        Self {
            values: fields.iter().map(|f| (f.key, String::new())).collect(),
        }
    }

    /// Returns a field value, empty if unset.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// Sets a field value.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// Returns whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// Returns the first required field without a value.
    #[must_use]
    pub fn first_missing<'a>(&self, fields: &'a [FieldSpec]) -> Option<&'a FieldSpec> {
        fields
            .iter()
            .find(|f| f.required && self.get(f.key).is_empty())
    }

    /// Presence check for required fields and option membership for selects.
    ///
    /// # Errors
    /// Returns the first failing field.
    pub fn validate(&self, fields: &[FieldSpec]) -> Result<(), ValidationError> {
        if let Some(field) = self.first_missing(fields) {
            return Err(ValidationError::missing(field.label));
        }

        for field in fields {
            let value = self.get(field.key);
            if let FieldKind::Select(options) = field.kind
                && !value.is_empty()
                && !options.contains(&value)
            {
                return Err(ValidationError::malformed(
                    field.label,
                    format!("'{value}' is not an available option"),
                ));
            }
        }

        Ok(())
    }
}

/// Synthetic receipt produced by a simulated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Synthetic transaction id.
    pub id: String,
    /// Originating service.
    pub service: ServiceKind,
    /// Draft frozen at submit time.
    pub values: FormDraft,
    /// Submission date.
    pub date: NaiveDate,
    /// Collaborator that "processed" the request.
    pub provider: String,
}

impl SubmissionRecord {
    /// Display format for receipt dates.
    pub const DATE_FORMAT: &'static str = "%b %d, %Y";

    /// Formatted submission date.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format(Self::DATE_FORMAT).to_string()
    }

    /// Fills a confirmation template from this record.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        render_template(template, |key| match key {
            "id" => Some(self.id.clone()),
            "date" => Some(self.formatted_date()),
            "provider" => Some(self.provider.clone()),
            other => self
                .values
                .values
                .contains_key(other)
                .then(|| self.values.get(other).to_string()),
        })
    }
}

/// Replaces `{name}` placeholders using `lookup`; unknown names are kept verbatim.
#[must_use]
pub fn render_template(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::select("bill_type", "Bill Type", &["Electricity", "Deposit"]),
        FieldSpec::text("account_number", "Account Number", ""),
        FieldSpec::amount("amount", "Amount"),
        FieldSpec::text("note", "Note", "").optional(),
    ];

    #[test]
    fn test_new_draft_is_empty() {
        let draft = FormDraft::for_fields(FIELDS);
        assert!(draft.is_empty());
        assert_eq!(draft.get("amount"), "");
        assert_eq!(draft.first_missing(FIELDS).map(|f| f.key), Some("bill_type"));
    }

    #[test]
    fn test_optional_field_not_required() {
        let mut draft = FormDraft::for_fields(FIELDS);
        draft.set("bill_type", "Electricity");
        draft.set("account_number", "12345");
        draft.set("amount", "75.00");

        assert!(draft.first_missing(FIELDS).is_none());
        assert!(draft.validate(FIELDS).is_ok());
    }

    #[test]
    fn test_whitespace_is_present() {
        let mut draft = FormDraft::for_fields(FIELDS);
        draft.set("bill_type", "Electricity");
        draft.set("account_number", "12345");
        draft.set("amount", "   ");

        assert!(draft.first_missing(FIELDS).is_none());
        assert!(draft.validate(FIELDS).is_ok());
    }

    #[test]
    fn test_unknown_option_is_malformed() {
        let mut draft = FormDraft::for_fields(FIELDS);
        draft.set("bill_type", "Gas");
        draft.set("account_number", "1");
        draft.set("amount", "1");

        assert!(matches!(
            draft.validate(FIELDS),
            Err(ValidationError::Malformed { .. })
        ));
    }

    #[test]
    fn test_amounts_are_not_format_checked() {
        let mut draft = FormDraft::for_fields(FIELDS);
        draft.set("bill_type", "Deposit");
        draft.set("account_number", "abc");
        draft.set("amount", "lots");

        assert!(draft.validate(FIELDS).is_ok());
    }

    #[test]
    fn test_clear_keeps_keys() {
        let mut draft = FormDraft::for_fields(FIELDS);
        draft.set("amount", "5");
        draft.clear();

        assert!(draft.is_empty());
        assert_eq!(draft, FormDraft::for_fields(FIELDS));
    }

    #[test]
    fn test_render_template() {
        let rendered = render_template("Paid ${amount} to {who}.", |key| match key {
            "amount" => Some("20".to_string()),
            _ => None,
        });
        assert_eq!(rendered, "Paid $20 to {who}.");
    }

    #[test]
    fn test_render_template_unterminated() {
        let rendered = render_template("Total {amount", |_| Some("x".to_string()));
        assert_eq!(rendered, "Total {amount");
    }

    #[test]
    fn test_record_render_uses_id_and_date() {
        let mut values = FormDraft::for_fields(FIELDS);
        values.set("amount", "75.00");
        let record = SubmissionRecord {
            id: "BPL-1".to_string(),
            service: ServiceKind::BplPayment,
            values,
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            provider: "MyGateway".to_string(),
        };

        assert_eq!(
            record.render("{id} on {date}: ${amount} via {provider}"),
            "BPL-1 on Oct 19, 2026: $75.00 via MyGateway"
        );
    }
}
