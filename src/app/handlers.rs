//! Action handlers for the application
//!
//! The `Actions` handler turns keybinding actions and raw key events into
//! state mutations. Compose mode takes raw keys (text entry); every other
//! mode goes through the configurable keybinding table.

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Action;

use super::form::Field;
use super::state::{App, Mode, NOTICE_DURATION, SectionId};

/// Lines moved per mouse wheel notch.
const WHEEL_SCROLL: usize = 3;

/// Handler for application actions
#[derive(Debug, Clone, Copy, Default)]
pub struct Actions;

impl Actions {
    /// Create a new action handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handle a key event according to the current mode
    ///
    /// # Errors
    ///
    /// Returns an error if restarting the animations fails
    pub fn handle_key(
        self,
        app: &mut App,
        code: KeyCode,
        modifiers: KeyModifiers,
        now: Instant,
    ) -> Result<()> {
        match app.mode {
            Mode::Help => {
                // Any dismissing key closes the overlay.
                if matches!(
                    app.config.keys.get_action(code, modifiers),
                    Some(Action::Cancel | Action::Help | Action::Quit | Action::Confirm)
                ) {
                    app.exit_mode();
                }
                Ok(())
            }
            Mode::Compose => {
                self.handle_compose_key(app, code, modifiers, now);
                Ok(())
            }
            Mode::Normal => self.handle_normal_key(app, code, modifiers, now),
        }
    }

    fn handle_normal_key(
        self,
        app: &mut App,
        code: KeyCode,
        modifiers: KeyModifiers,
        now: Instant,
    ) -> Result<()> {
        // Digits jump straight to a section, like the navbar links.
        if let KeyCode::Char(c) = code
            && modifiers.is_empty()
            && let Some(digit) = c.to_digit(10)
            && digit >= 1
            && let Ok(index) = usize::try_from(digit - 1)
            && let Some(&section) = SectionId::ALL.get(index)
        {
            app.jump_to_section(section);
            return Ok(());
        }

        let Some(action) = app.config.keys.get_action(code, modifiers) else {
            return Ok(());
        };
        self.handle_action(app, action, now)
    }

    /// Handle a keybinding action
    ///
    /// # Errors
    ///
    /// Returns an error if restarting the animations fails
    pub fn handle_action(self, app: &mut App, action: Action, now: Instant) -> Result<()> {
        match action {
            Action::ScrollUp => app.scroll_up(1),
            Action::ScrollDown => app.scroll_down(1),
            Action::HalfPageUp => app.scroll_up(app.half_page()),
            Action::HalfPageDown => app.scroll_down(app.half_page()),
            Action::ScrollTop => app.scroll_to_top(),
            Action::ScrollBottom => app.scroll_to_bottom(),
            Action::NextSection => app.next_section(),
            Action::PrevSection => app.prev_section(),
            Action::Compose => {
                app.jump_to_section(SectionId::Contact);
                app.enter_mode(Mode::Compose);
            }
            Action::ToggleMotion => self.toggle_motion(app, now)?,
            Action::Help => app.enter_mode(Mode::Help),
            Action::Quit => {
                debug!("Quit requested");
                app.typewriter.cancel();
                app.should_quit = true;
            }
            Action::Cancel => {
                if app.notice.is_armed() {
                    app.notice.cancel();
                } else {
                    app.exit_mode();
                }
            }
            Action::Confirm => {
                if app.notice.is_armed() {
                    app.notice.cancel();
                }
            }
        }
        Ok(())
    }

    /// Raw key handling while the contact form is focused
    fn handle_compose_key(
        self,
        app: &mut App,
        code: KeyCode,
        modifiers: KeyModifiers,
        now: Instant,
    ) {
        match code {
            KeyCode::Esc => app.exit_mode(),
            KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
            KeyCode::Backspace => app.form.backspace(),
            KeyCode::Enter => {
                // Enter advances through the fields and submits from the
                // message body.
                if app.form.focus == Field::Message {
                    self.submit_contact(app, now);
                } else {
                    app.form.focus_next();
                }
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.form.insert(c);
            }
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(self, app: &mut App, mouse: &MouseEvent) {
        if app.mode != Mode::Normal {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => app.scroll_up(WHEEL_SCROLL),
            MouseEventKind::ScrollDown => app.scroll_down(WHEEL_SCROLL),
            _ => {}
        }
    }

    /// Validate and submit the contact form
    pub fn submit_contact(self, app: &mut App, now: Instant) {
        if let Some(field) = app.form.first_empty() {
            // Focus the first empty field instead of submitting.
            app.form.focus = field;
            app.status_message = Some(format!("Please fill in \"{}\"", field.label()));
            debug!(field = field.label(), "Contact form incomplete");
            return;
        }

        info!(
            name = %app.form.name,
            email = %app.form.email,
            chars = app.form.message.chars().count(),
            "Contact form submitted"
        );
        app.form.clear();
        app.exit_mode();
        app.status_message = None;
        // Re-arming replaces a still-visible notice's deadline.
        app.notice.arm(now + NOTICE_DURATION);
    }

    /// Flip reduced motion, apply it to the animators, and persist it
    fn toggle_motion(self, app: &mut App, now: Instant) -> Result<()> {
        app.settings.reduce_motion = !app.settings.reduce_motion;
        if app.settings.reduce_motion {
            app.complete_animations(now);
        } else {
            app.restart_animations(now)?;
        }
        if let Err(e) = app.settings.save() {
            warn!("Failed to save settings: {e}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Settings;
    use crate::config::Config;
    use crate::content::Portfolio;

    fn test_app(now: Instant) -> App {
        match App::new(
            Config::default(),
            Settings::default(),
            Portfolio::builtin(),
            now,
        ) {
            Ok(app) => app,
            Err(e) => unreachable!("builtin content must build an app: {e}"),
        }
    }

    fn with_layout(app: &mut App) {
        // A synthetic 7-section document, 20 lines each.
        let ranges: Vec<(usize, usize)> = (0..SectionId::ALL.len())
            .map(|i| (i * 20, 20))
            .collect();
        app.set_layout(&ranges, 140);
    }

    #[test]
    fn test_scroll_actions_clamp() -> Result<()> {
        let now = Instant::now();
        let mut app = test_app(now);
        with_layout(&mut app);
        let actions = Actions::new();

        actions.handle_action(&mut app, Action::ScrollUp, now)?;
        assert_eq!(app.scroll, 0);

        actions.handle_action(&mut app, Action::ScrollBottom, now)?;
        assert_eq!(app.scroll, app.max_scroll());

        actions.handle_action(&mut app, Action::ScrollDown, now)?;
        assert_eq!(app.scroll, app.max_scroll());

        actions.handle_action(&mut app, Action::ScrollTop, now)?;
        assert_eq!(app.scroll, 0);
        Ok(())
    }

    #[test]
    fn test_digit_jumps_to_section() -> Result<()> {
        let now = Instant::now();
        let mut app = test_app(now);
        with_layout(&mut app);
        let actions = Actions::new();

        actions.handle_key(&mut app, KeyCode::Char('3'), KeyModifiers::NONE, now)?;
        assert_eq!(app.current_section(), SectionId::Skills);
        assert_eq!(app.scroll, 40);
        Ok(())
    }

    #[test]
    fn test_compose_enter_advances_then_submits() -> Result<()> {
        let now = Instant::now();
        let mut app = test_app(now);
        with_layout(&mut app);
        let actions = Actions::new();

        actions.handle_action(&mut app, Action::Compose, now)?;
        assert_eq!(app.mode, Mode::Compose);

        for c in "Siva".chars() {
            actions.handle_key(&mut app, KeyCode::Char(c), KeyModifiers::NONE, now)?;
        }
        actions.handle_key(&mut app, KeyCode::Enter, KeyModifiers::NONE, now)?;
        assert_eq!(app.form.focus, Field::Email);

        for c in "s@example.com".chars() {
            actions.handle_key(&mut app, KeyCode::Char(c), KeyModifiers::NONE, now)?;
        }
        actions.handle_key(&mut app, KeyCode::Enter, KeyModifiers::NONE, now)?;
        for c in "Hello!".chars() {
            actions.handle_key(&mut app, KeyCode::Char(c), KeyModifiers::NONE, now)?;
        }
        actions.handle_key(&mut app, KeyCode::Enter, KeyModifiers::NONE, now)?;

        // Valid submit: form reset, back to normal, notice armed.
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.form.name.is_empty());
        assert_eq!(app.notice.due(), Some(now + NOTICE_DURATION));
        Ok(())
    }

    #[test]
    fn test_submit_with_empty_field_focuses_it() {
        let now = Instant::now();
        let mut app = test_app(now);
        let actions = Actions::new();

        app.enter_mode(Mode::Compose);
        app.form.name = "Siva".to_string();
        app.form.message = "Hi".to_string();
        app.form.focus = Field::Message;

        actions.submit_contact(&mut app, now);

        assert_eq!(app.mode, Mode::Compose);
        assert_eq!(app.form.focus, Field::Email);
        assert_eq!(app.form.name, "Siva");
        assert!(!app.notice.is_armed());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_escape_from_compose_clears_form() -> Result<()> {
        let now = Instant::now();
        let mut app = test_app(now);
        let actions = Actions::new();

        app.enter_mode(Mode::Compose);
        app.form.insert('x');
        actions.handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE, now)?;

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.form.name.is_empty());
        Ok(())
    }

    #[test]
    fn test_toggle_motion_freezes_typewriter() -> Result<()> {
        let now = Instant::now();
        let mut app = test_app(now);
        let actions = Actions::new();

        actions.handle_action(&mut app, Action::ToggleMotion, now)?;
        assert!(app.settings.reduce_motion);
        assert!(app.typewriter.is_cancelled());
        assert_eq!(app.typewriter.display(), "Software Enthusiast");

        actions.handle_action(&mut app, Action::ToggleMotion, now)?;
        assert!(!app.settings.reduce_motion);
        assert!(!app.typewriter.is_cancelled());
        assert_eq!(app.typewriter.display(), "");
        Ok(())
    }

    #[test]
    fn test_quit_cancels_typewriter() -> Result<()> {
        let now = Instant::now();
        let mut app = test_app(now);
        let actions = Actions::new();

        actions.handle_action(&mut app, Action::Quit, now)?;
        assert!(app.should_quit);
        assert!(app.typewriter.is_cancelled());
        Ok(())
    }

    #[test]
    fn test_help_overlay_toggles() -> Result<()> {
        let now = Instant::now();
        let mut app = test_app(now);
        let actions = Actions::new();

        actions.handle_action(&mut app, Action::Help, now)?;
        assert_eq!(app.mode, Mode::Help);

        actions.handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE, now)?;
        assert_eq!(app.mode, Mode::Normal);
        Ok(())
    }
}
