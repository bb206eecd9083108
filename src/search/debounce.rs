//! Cancellable debounce timer for the search input
//!
//! Collapses a burst of query changes into a single settle: each change
//! re-schedules the deadline, and the timer fires once when a full quiet
//! period has elapsed since the last change. Time is passed in by the
//! caller, so the event loop owns the clock and tests never sleep.

use std::time::{Duration, Instant};

/// Default quiet period before a query is dispatched
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// One-shot, re-schedulable timer
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a timer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule (or re-schedule) the timer to fire one quiet period from `now`
    ///
    /// A pending deadline is replaced, which is what cancels the emission
    /// for the superseded change.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline without firing
    pub const fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any
    ///
    /// Lets the event loop bound its poll timeout instead of spinning.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire the timer if its deadline has passed
    ///
    /// Returns true at most once per scheduled deadline; firing consumes
    /// the deadline.
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

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_does_not_fire_before_quiet_period() {
        let mut timer = Debouncer::new(DELAY);
        let start = Instant::now();

        timer.schedule(start);
        assert!(!timer.fire(start));
        assert!(!timer.fire(start + Duration::from_millis(299)));
        assert!(timer.is_pending());
    }

    #[test]
    fn test_fires_exactly_once_after_settling() {
        let mut timer = Debouncer::new(DELAY);
        let start = Instant::now();

        timer.schedule(start);
        assert!(timer.fire(start + DELAY));
        // Consumed; a second poll must not fire again
        assert!(!timer.fire(start + DELAY * 2));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending_deadline() {
        let mut timer = Debouncer::new(DELAY);
        let start = Instant::now();

        timer.schedule(start);
        timer.schedule(start + Duration::from_millis(200));

        // Old deadline passed, new one has not
        assert!(!timer.fire(start + Duration::from_millis(320)));
        // New deadline reached
        assert!(timer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel_suppresses_emission() {
        let mut timer = Debouncer::new(DELAY);
        let start = Instant::now();

        timer.schedule(start);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.fire(start + DELAY * 2));
    }

    #[test]
    fn test_deadline_exposed_for_poll_timeout() {
        let mut timer = Debouncer::new(DELAY);
        assert_eq!(timer.deadline(), None);

        let start = Instant::now();
        timer.schedule(start);
        assert_eq!(timer.deadline(), Some(start + DELAY));
    }
}
