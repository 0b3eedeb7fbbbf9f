//! Cancellable deferred-reset timer
//!
//! The core flags a confirmation mismatch but does not own timing; the host
//! schedules the full reset after a short display delay. At most one
//! deadline is pending at a time - scheduling replaces any earlier one, and
//! ending the session cancels it.

use std::time::{Duration, Instant};

/// One-shot timer polled from the UI tick loop
#[derive(Debug, Default)]
pub struct ResetTimer {
    deadline: Option<Instant>,
}

impl ResetTimer {
    /// Create a timer with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending deadline
    pub fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    /// Disarm the timer
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has elapsed
    ///
    /// Returns true at most once per scheduled deadline.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
