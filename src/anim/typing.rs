//! Typed-intro animation: the rotating role line in the hero section.
//!
//! Types each role out one character at a time, holds the complete line,
//! deletes it again, then moves to the next role, wrapping forever. The
//! cycle is a three-phase state machine with exactly one pending deadline;
//! each fired step schedules its successor anchored on the deadline that
//! fired, so a late poll replays overdue steps in order instead of
//! drifting the cadence.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Delay between two typed characters.
pub const TYPE_TICK: Duration = Duration::from_millis(100);

/// Delay between two deleted characters.
pub const DELETE_TICK: Duration = Duration::from_millis(50);

/// Hold on the fully typed role before deletion starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(1000);

/// Error constructing a [`Typewriter`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TypewriterError {
    /// The role list was empty; the animator has nothing to cycle.
    #[error("typewriter requires at least one role")]
    EmptyRoles,
}

/// Phase of the typing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appending one character per tick.
    Typing,
    /// Full role shown, waiting out the hold delay.
    Holding,
    /// Removing one trailing character per tick.
    Deleting,
}

/// Rotating typed-text animation over a fixed, non-empty list of roles.
///
/// The visible string is always a character prefix of the current role.
/// Cancelling clears the pending deadline; a cancelled typewriter never
/// mutates again, no matter how often it is polled.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    role: usize,
    shown: String,
    chars: usize,
    phase: Phase,
    deadline: Option<Instant>,
}

impl Typewriter {
    /// Create an animator starting on the first role with nothing shown.
    ///
    /// The first type tick is due `TYPE_TICK` after `start`.
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::EmptyRoles`] if `roles` is empty.
    pub fn new(roles: Vec<String>, start: Instant) -> Result<Self, TypewriterError> {
        if roles.is_empty() {
            return Err(TypewriterError::EmptyRoles);
        }
        Ok(Self {
            roles,
            role: 0,
            shown: String::new(),
            chars: 0,
            phase: Phase::Typing,
            deadline: Some(start + TYPE_TICK),
        })
    }

    /// The currently visible prefix of the current role.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.shown
    }

    /// Current phase of the cycle.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the role currently being typed or deleted.
    #[must_use]
    pub const fn role_index(&self) -> usize {
        self.role
    }

    /// Number of visible characters (characters, not bytes).
    #[must_use]
    pub const fn shown_chars(&self) -> usize {
        self.chars
    }

    /// When the next step is due, or `None` once cancelled.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel the pending step. Later polls are no-ops.
    pub const fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether the animator has been cancelled or frozen.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.deadline.is_none()
    }

    /// Pin the first role fully typed and stop scheduling (reduced motion).
    pub fn freeze(&mut self) {
        self.role = 0;
        self.shown = self.roles[0].clone();
        self.chars = self.shown.chars().count();
        self.phase = Phase::Holding;
        self.deadline = None;
    }

    /// Run every step whose deadline has passed at `now`.
    ///
    /// Returns `true` if the visible string changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(due) = self.deadline {
            if due > now {
                break;
            }
            changed |= self.step(due);
        }
        changed
    }

    /// Fire one step at its deadline and schedule the next one.
    fn step(&mut self, fired: Instant) -> bool {
        match self.phase {
            Phase::Typing => {
                let role = &self.roles[self.role];
                let mut changed = false;
                if let Some(next) = role.chars().nth(self.chars) {
                    self.shown.push(next);
                    self.chars += 1;
                    changed = true;
                }
                if self.chars >= role.chars().count() {
                    self.phase = Phase::Holding;
                    self.deadline = Some(fired + HOLD_DELAY);
                } else {
                    self.deadline = Some(fired + TYPE_TICK);
                }
                changed
            }
            Phase::Holding => {
                // No character change; the first deletion lands one
                // DELETE_TICK after the hold expires.
                self.phase = Phase::Deleting;
                self.deadline = Some(fired + DELETE_TICK);
                false
            }
            Phase::Deleting => {
                let changed = self.shown.pop().is_some();
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.role = (self.role + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    self.deadline = Some(fired + TYPE_TICK);
                } else {
                    self.deadline = Some(fired + DELETE_TICK);
                }
                changed
            }
        }
    }
}
