//! Delayed actions bound to the lifetime of a guard.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Posts actions onto the app channel after a delay.
#[derive(Debug, Clone)]
pub struct TransitionScheduler<A> {
    tx: mpsc::UnboundedSender<A>,
}

impl<A: Send + 'static> TransitionScheduler<A> {
    /// Creates scheduler sending into `tx`.
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<A>) -> Self {
        Self { tx }
    }

    /// Sends `action` once `delay` elapses, unless the returned guard is dropped first.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use = "dropping the guard cancels the transition"]
    pub fn schedule(&self, delay: Duration, action: A) -> ScheduledTransition {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(action).is_err() {
                trace!("Action channel closed before scheduled transition fired");
            }
        });
        ScheduledTransition { handle }
    }
}

/// Pending transition; aborted on drop.
#[derive(Debug)]
pub struct ScheduledTransition {
    handle: JoinHandle<()>,
}

impl ScheduledTransition {
    /// Returns whether the action was already sent or the task aborted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTransition {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_exact_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = TransitionScheduler::new(tx);
        let start = Instant::now();

        let _guard = scheduler.schedule(Duration::from_millis(3000), 7_u32);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(start.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_guard_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = TransitionScheduler::new(tx);

        let guard = scheduler.schedule(Duration::from_millis(3000), 1_u32);
        drop(guard);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_guards() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = TransitionScheduler::new(tx);

        let cancelled = scheduler.schedule(Duration::from_millis(1000), "first");
        let _kept = scheduler.schedule(Duration::from_millis(2000), "second");
        drop(cancelled);

        assert_eq!(rx.recv().await, Some("second"));
    }
}
