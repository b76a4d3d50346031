//! Scroll-triggered one-shot reveal of a content section.
//!
//! A [`Reveal`] latches the first time its section's visible fraction
//! crosses the threshold and then ramps an entrance progress from 0 to 1
//! over a fixed duration. The latch is monotonic: once fired it stays
//! fired for the lifetime of the target, no matter what the scroll does
//! afterwards. A section that never becomes visible simply never fires.

use std::time::{Duration, Instant};

/// Length of the entrance animation once a reveal fires.
pub const ENTER_DURATION: Duration = Duration::from_millis(600);

/// Set-once visibility latch plus entrance progress for one section.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    threshold: f64,
    fired_at: Option<Instant>,
    forced: bool,
}

impl Reveal {
    /// Latch once the visible fraction exceeds `threshold` (0.0..1.0).
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired_at: None,
            forced: false,
        }
    }

    /// Latch as soon as any part of the section is visible.
    #[must_use]
    pub const fn any_visible() -> Self {
        Self::new(0.0)
    }

    /// Feed one visibility observation.
    ///
    /// Returns `true` exactly once, on the observation that fires the
    /// latch. `visible` is the fraction of the section inside the
    /// viewport; zero means fully out of view and never fires.
    pub fn observe(&mut self, visible: f64, now: Instant) -> bool {
        if self.fired_at.is_some() {
            return false;
        }
        if visible > 0.0 && visible >= self.threshold {
            self.fired_at = Some(now);
            return true;
        }
        false
    }

    /// Whether the latch has fired.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired_at.is_some() || self.forced
    }

    /// The instant the latch fired, if it has.
    #[must_use]
    pub const fn fired_at(&self) -> Option<Instant> {
        self.fired_at
    }

    /// Entrance progress in `[0.0, 1.0]`: 0 while unfired, ramping
    /// linearly to 1 over [`ENTER_DURATION`] from the fire instant.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.forced {
            return 1.0;
        }
        self.fired_at.map_or(0.0, |at| {
            let elapsed = now.saturating_duration_since(at);
            (elapsed.as_secs_f64() / ENTER_DURATION.as_secs_f64()).min(1.0)
        })
    }

    /// Fire immediately with the entrance already complete (reduced
    /// motion).
    pub fn force(&mut self, now: Instant) {
        if self.fired_at.is_none() {
            self.fired_at = Some(now);
        }
        self.forced = true;
    }
}
