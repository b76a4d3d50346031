//! Event handling for the TUI

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::{Duration, Instant};

/// Application events
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Terminal tick (for animations/updates)
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Handler that polls for terminal events
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    /// Idle tick rate
    tick_rate: Duration,
}

impl Handler {
    /// Create a new event handler with the given idle tick rate
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next(&self) -> Result<Event> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event, waking no later than `deadline`.
    ///
    /// Animation deadlines (a 50ms delete tick, a gauge mid-fill) are
    /// often sooner than the idle tick rate; the timeout shrinks to
    /// whichever comes first so a tick fires on time.
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next_before(&self, deadline: Option<Instant>) -> Result<Event> {
        let timeout = deadline.map_or(self.tick_rate, |due| {
            due.saturating_duration_since(Instant::now())
                .min(self.tick_rate)
        });
        self.poll(timeout)
    }

    fn poll(&self, timeout: Duration) -> Result<Event> {
        if event::poll(timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }

    /// Get the idle tick rate
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(100)
    }
}
