//! Color palette definitions

use ratatui::style::Color;

// UI chrome
/// Default border color.
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Navbar background once the document is scrolled.
pub const NAVBAR_SCROLLED_BG: Color = Color::Rgb(235, 238, 245);
/// Navbar text over the scrolled background.
pub const NAVBAR_SCROLLED_FG: Color = Color::Rgb(30, 35, 60);
/// Highlight for the active section tab.
pub const TAB_ACTIVE: Color = Color::Rgb(100, 180, 220);

// Text
/// Primary body text.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Secondary text.
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Barely-there text, first step of the reveal fade.
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Accents
/// Headings and the typed role line.
pub const ACCENT: Color = Color::Rgb(120, 160, 220);
/// Links and secondary highlights.
pub const ACCENT_ALT: Color = Color::Rgb(170, 140, 220);
/// Positive marks (checklist ticks, the sent notice).
pub const SUCCESS: Color = Color::Rgb(120, 180, 120);

// Skill bars
/// Filled portion of a skill bar.
pub const BAR_FILL: Color = Color::Rgb(100, 150, 220);
/// Empty portion of a skill bar.
pub const BAR_EMPTY: Color = Color::Rgb(50, 55, 70);

// Modals
/// Modal background.
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
/// Input field background in the contact form.
pub const INPUT_BG: Color = Color::Rgb(35, 40, 50);
/// Focused input field background.
pub const INPUT_FOCUS_BG: Color = Color::Rgb(45, 55, 75);
