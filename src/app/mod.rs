//! Application state and logic

mod event;
mod form;
mod handlers;
mod settings;
mod state;

pub use event::{Event, Handler};
pub use form::{ContactForm, Field};
pub use handlers::Actions;
pub use settings::Settings;
pub use state::{App, Mode, NOTICE_DURATION, SCROLLED_THRESHOLD, SectionId};
