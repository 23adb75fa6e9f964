//! Synthetic id generation port.

/// Produces transaction ids for simulated submissions.
pub trait IdGenerator: Send + Sync {
    /// Returns a new id starting with `prefix`.
    fn next_id(&self, prefix: &str) -> String;
}
