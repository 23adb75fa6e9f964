//! Know-your-customer onboarding profile.

use super::form::{FieldSpec, FormDraft};
use crate::domain::errors::ValidationError;

/// Islands offered on the KYC form.
pub const ISLANDS: &[&str] = &[
    "New Providence",
    "Grand Bahama",
    "Abaco",
    "Eleuthera",
    "Exuma",
    "Andros",
    "Long Island",
];

/// Biometric capture methods.
pub const BIOMETRIC_METHODS: &[&str] = &["Fingerprint", "Face Scan"];

/// Fields collected on the KYC details step.
pub const KYC_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("full_name", "Full Name", "As shown on your ID"),
    FieldSpec::text("telephone", "Telephone", "(242) 555-0100").optional(),
    FieldSpec::text("nib_number", "NIB Number", "National Insurance number"),
    FieldSpec::text("address", "Home Address", "Street, settlement"),
    FieldSpec::select("island", "Island", ISLANDS).optional(),
    FieldSpec::select("biometric_type", "Biometric Method", BIOMETRIC_METHODS).optional(),
];

/// Identity details gathered during onboarding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct KycProfile {
    pub full_name: String,
    pub telephone: String,
    pub nib_number: String,
    pub address: String,
    pub island: String,
    pub biometric_type: String,
}

impl KycProfile {
    /// Builds a profile from a KYC draft.
    ///
    /// # Errors
    /// Returns the first missing or malformed field.
    pub fn from_draft(draft: &FormDraft) -> Result<Self, ValidationError> {
        draft.validate(KYC_FIELDS)?;

        Ok(Self {
            full_name: draft.get("full_name").trim().to_string(),
            telephone: draft.get("telephone").trim().to_string(),
            nib_number: draft.get("nib_number").trim().to_string(),
            address: draft.get("address").trim().to_string(),
            island: draft.get("island").to_string(),
            biometric_type: draft.get("biometric_type").to_string(),
        })
    }

    /// Returns the first word of the full name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }

    /// Returns the chosen capture method, defaulting to fingerprint.
    #[must_use]
    pub fn capture_method(&self) -> &str {
        if self.biometric_type.is_empty() {
            BIOMETRIC_METHODS[0]
        } else {
            &self.biometric_type
        }
    }
}
