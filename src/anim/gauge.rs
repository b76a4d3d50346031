//! Skill-bar fill animation.
//!
//! Each technical skill renders as a bar that fills from zero to its
//! stored target percentage the first time the skills section reveals.
//! Bars share one duration and ease and are staggered by a fixed
//! per-item delay so they cascade instead of filling in lockstep.

use std::time::{Duration, Instant};

/// Time a bar takes to fill once its stagger delay has elapsed.
pub const FILL_DURATION: Duration = Duration::from_millis(1500);

/// Stagger offset between neighbouring bars.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// One bar's fill state: a start latch plus pure functions of `now`.
#[derive(Debug, Clone, Copy)]
pub struct Gauge {
    target: u8,
    delay: Duration,
    started_at: Option<Instant>,
    forced: bool,
}

impl Gauge {
    /// A bar filling to `target` percent after `delay`.
    #[must_use]
    pub const fn new(target: u8, delay: Duration) -> Self {
        Self {
            target,
            delay,
            started_at: None,
            forced: false,
        }
    }

    /// A bar at position `index` in a cascade, delayed by
    /// `index * STAGGER_STEP`.
    #[must_use]
    pub fn staggered(target: u8, index: usize) -> Self {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        Self::new(target, STAGGER_STEP.saturating_mul(steps))
    }

    /// Target percentage the fill ends at.
    #[must_use]
    pub const fn target(&self) -> u8 {
        self.target
    }

    /// Start the fill. Idempotent: a started gauge keeps its original
    /// start instant.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Whether the fill has been started.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started_at.is_some() || self.forced
    }

    /// Current percentage in `[0, target]` with cubic ease-out, ending at
    /// exactly `target` once the fill completes.
    #[must_use]
    pub fn percent(&self, now: Instant) -> f64 {
        if self.forced {
            return f64::from(self.target);
        }
        let Some(started) = self.started_at else {
            return 0.0;
        };
        let ramp = now
            .saturating_duration_since(started)
            .saturating_sub(self.delay);
        if ramp >= FILL_DURATION {
            return f64::from(self.target);
        }
        let t = ramp.as_secs_f64() / FILL_DURATION.as_secs_f64();
        f64::from(self.target) * ease_out(t)
    }

    /// Whether the fill has reached its target.
    #[must_use]
    pub fn is_full(&self, now: Instant) -> bool {
        self.forced
            || self.started_at.is_some_and(|started| {
                now.saturating_duration_since(started)
                    .saturating_sub(self.delay)
                    >= FILL_DURATION
            })
    }

    /// Jump straight to the target (reduced motion).
    pub fn force(&mut self, now: Instant) {
        self.start(now);
        self.forced = true;
    }
}

/// Cubic ease-out over `t` in `[0, 1]`.
const fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
