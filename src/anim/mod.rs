//! Animation primitives for the portfolio UI
//!
//! Every animator in this module is a plain state machine polled with an
//! explicit [`std::time::Instant`]. Nothing here reads the wall clock or
//! spawns a timer thread; the event loop supplies `now` and asks each
//! animator for its next deadline so the poll timeout can be sized to it.
//! This keeps the cadences exact under a slow loop and makes every
//! animation testable with synthetic time.

mod gauge;
mod reveal;
mod timer;
mod typing;

pub use gauge::{FILL_DURATION, Gauge, STAGGER_STEP};
pub use reveal::{ENTER_DURATION, Reveal};
pub use timer::OneShot;
pub use typing::{DELETE_TICK, HOLD_DELAY, Phase, TYPE_TICK, Typewriter, TypewriterError};
