//! Cancellable one-shot deadline.
//!
//! The smallest piece of the timing model: a single pending instant that
//! fires at most once per arming. Used for delayed UI transitions such as
//! auto-hiding the contact confirmation notice.

use std::time::Instant;

/// A deadline that fires once and can be re-armed or cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShot {
    due: Option<Instant>,
}

impl OneShot {
    /// An idle timer with nothing pending.
    #[must_use]
    pub const fn idle() -> Self {
        Self { due: None }
    }

    /// Arm (or re-arm) the timer for `due`. Re-arming replaces any
    /// pending deadline.
    pub const fn arm(&mut self, due: Instant) {
        self.due = Some(due);
    }

    /// Drop the pending deadline, if any.
    pub const fn cancel(&mut self) {
        self.due = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub const fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Returns `true` exactly once, on the first poll at or past the
    /// deadline. Firing disarms the timer.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
