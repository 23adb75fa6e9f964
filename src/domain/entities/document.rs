//! Sample documents shown in the locker.

use chrono::NaiveDate;

/// Verification status of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum DocumentStatus {
    Verified,
    Pending,
    Expired,
}

impl DocumentStatus {
    /// Returns display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending review",
            Self::Expired => "Expired",
        }
    }
}

/// One document in the locker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct StoredDocument {
    pub title: &'static str,
    pub issuer: &'static str,
    pub number: &'static str,
    pub issued: NaiveDate,
    pub status: DocumentStatus,
}

impl StoredDocument {
    const fn new(
        title: &'static str,
        issuer: &'static str,
        number: &'static str,
        issued: NaiveDate,
        status: DocumentStatus,
    ) -> Self {
        Self {
            title,
            issuer,
            number,
            issued,
            status,
        }
    }
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => NaiveDate::MIN,
    }
}

/// Hard-coded locker contents.
pub static SAMPLE_DOCUMENTS: [StoredDocument; 5] = [
    StoredDocument::new(
        "Bahamas Passport",
        "Passport Office",
        "P0481516",
        date(2022, 3, 14),
        DocumentStatus::Verified,
    ),
    StoredDocument::new(
        "National Insurance Card",
        "National Insurance Board",
        "NIB 12345678",
        date(2015, 9, 1),
        DocumentStatus::Verified,
    ),
    StoredDocument::new(
        "Birth Certificate",
        "Registrar General's Department",
        "BC-1994-22871",
        date(1994, 6, 22),
        DocumentStatus::Verified,
    ),
    StoredDocument::new(
        "Driver's License",
        "Road Traffic Department",
        "D1234567",
        date(2021, 1, 30),
        DocumentStatus::Expired,
    ),
    StoredDocument::new(
        "Voter's Card",
        "Parliamentary Registration Department",
        "VR-0099812",
        date(2025, 11, 3),
        DocumentStatus::Pending,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dates_are_valid() {
        assert!(SAMPLE_DOCUMENTS.iter().all(|d| d.issued != NaiveDate::MIN));
    }
}
