//! Wall-clock transaction ids.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::domain::ports::IdGenerator;

/// Ids of the form `PREFIX-<unix millis>`, strictly increasing per process.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: AtomicI64,
}

impl TimestampIdGenerator {
    /// Creates new generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_stamp(&self, now: i64) -> i64 {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(current + 1);
            match self
                .last
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => current = actual,
            }
        }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let stamp = self.next_stamp(Utc::now().timestamp_millis());
        format!("{prefix}-{stamp}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_digits() {
        let id = TimestampIdGenerator::new().next_id("BPL");
        let (prefix, stamp) = id.split_once('-').unwrap();
        assert_eq!(prefix, "BPL");
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_same_millisecond_still_unique() {
        let generator = TimestampIdGenerator::new();
        assert_eq!(generator.next_stamp(1000), 1000);
        assert_eq!(generator.next_stamp(1000), 1001);
        assert_eq!(generator.next_stamp(999), 1002);
        assert_eq!(generator.next_stamp(5000), 5000);
    }
}
