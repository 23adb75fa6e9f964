//! Clock port definition.

use chrono::NaiveDate;

/// Source of the current date for receipts.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Clock pinned to one date.
    pub struct FixedClock(pub NaiveDate);

    impl FixedClock {
        pub fn ymd(year: i32, month: u32, day: u32) -> Self {
            Self(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
        }
    }

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }
}
