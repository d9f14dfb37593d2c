//! Trailing-edge debounce for resize notifications.
//!
//! Collapses bursts of notifications into a single deadline that fires once
//! the burst has been quiet for the configured idle window. Modeled as a
//! cancellable scheduled task polled from the UI event loop: there is no
//! timer thread, so firing can never race a deactivation.

use std::time::{Duration, Instant};

/// A single pending deadline with trailing-edge semantics.
///
/// Each [`schedule`](IdleDebouncer::schedule) replaces any pending deadline,
/// so the deadline only elapses after notifications stop arriving for the
/// full idle window. [`cancel`](IdleDebouncer::cancel) drops a pending
/// deadline outright.
#[derive(Debug)]
pub struct IdleDebouncer {
    idle: Duration,
    deadline: Option<Instant>,
}

impl IdleDebouncer {
    /// Create a debouncer with the given idle window.
    pub fn new(idle: Duration) -> Self {
        Self {
            idle,
            deadline: None,
        }
    }

    /// Schedule (or re-schedule) the deadline `idle` past `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.idle);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has elapsed by `now`.
    ///
    /// Returns `true` exactly once per elapsed deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: Duration = Duration::from_millis(300);

    #[test]
    fn test_fires_only_after_idle_window() {
        let mut debounce = IdleDebouncer::new(IDLE);
        let start = Instant::now();

        debounce.schedule(start);
        assert!(!debounce.fire(start + Duration::from_millis(299)));
        assert!(debounce.fire(start + Duration::from_millis(300)));

        // Consumed: does not fire again
        assert!(!debounce.fire(start + Duration::from_millis(400)));
    }

    #[test]
    fn test_reschedule_replaces_pending_deadline() {
        let mut debounce = IdleDebouncer::new(IDLE);
        let start = Instant::now();

        debounce.schedule(start);
        debounce.schedule(start + Duration::from_millis(200));

        // Original deadline has passed but was replaced
        assert!(!debounce.fire(start + Duration::from_millis(350)));
        assert!(debounce.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel_drops_pending_deadline() {
        let mut debounce = IdleDebouncer::new(IDLE);
        let start = Instant::now();

        debounce.schedule(start);
        assert!(debounce.is_pending());

        debounce.cancel();
        assert!(!debounce.is_pending());
        assert!(!debounce.fire(start + Duration::from_secs(10)));
    }
}
