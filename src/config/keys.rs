//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Scroll the document up one line
    ScrollUp,
    /// Scroll the document down one line
    ScrollDown,
    /// Scroll up half a viewport
    HalfPageUp,
    /// Scroll down half a viewport
    HalfPageDown,
    /// Jump to the top of the document
    ScrollTop,
    /// Jump to the bottom of the document
    ScrollBottom,
    /// Jump to the next section
    NextSection,
    /// Jump to the previous section
    PrevSection,
    /// Open the contact form
    Compose,
    /// Toggle reduced motion
    ToggleMotion,
    /// Show help
    Help,
    /// Quit application
    Quit,
    /// Cancel current operation
    Cancel,
    /// Confirm current operation
    Confirm,
}

/// Categories for grouping actions in help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Scrolling and section navigation
    Navigation,
    /// Contact form
    Contact,
    /// Miscellaneous actions
    Other,
    /// Actions not shown in help (context-specific)
    Hidden,
}

impl ActionGroup {
    /// Get the display title for this group
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Contact => "Contact",
            Self::Other => "Other",
            Self::Hidden => "",
        }
    }
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::HalfPageUp => "Half page up",
            Self::HalfPageDown => "Half page down",
            Self::ScrollTop => "Jump to top",
            Self::ScrollBottom => "Jump to bottom",
            Self::NextSection => "Next section",
            Self::PrevSection => "Previous section",
            Self::Compose => "Write a message",
            Self::ToggleMotion => "Toggle reduced motion",
            Self::Help => "Show this help",
            Self::Quit => "Quit",
            Self::Cancel => "Cancel",
            Self::Confirm => "Confirm",
        }
    }

    /// Get the group this action belongs to
    #[must_use]
    pub const fn group(self) -> ActionGroup {
        match self {
            Self::ScrollUp
            | Self::ScrollDown
            | Self::HalfPageUp
            | Self::HalfPageDown
            | Self::ScrollTop
            | Self::ScrollBottom
            | Self::NextSection
            | Self::PrevSection => ActionGroup::Navigation,
            Self::Compose => ActionGroup::Contact,
            Self::ToggleMotion | Self::Help | Self::Quit => ActionGroup::Other,
            Self::Cancel | Self::Confirm => ActionGroup::Hidden,
        }
    }

    /// All actions in display order for help
    pub const ALL_FOR_HELP: &'static [Self] = &[
        // Navigation
        Self::NextSection,
        Self::PrevSection,
        Self::ScrollUp,
        Self::ScrollDown,
        Self::HalfPageUp,
        Self::HalfPageDown,
        Self::ScrollTop,
        Self::ScrollBottom,
        // Contact
        Self::Compose,
        // Other
        Self::ToggleMotion,
        Self::Help,
        Self::Quit,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("j".to_string(), Action::ScrollDown);
        bindings.insert("Down".to_string(), Action::ScrollDown);
        bindings.insert("k".to_string(), Action::ScrollUp);
        bindings.insert("Up".to_string(), Action::ScrollUp);
        bindings.insert("Ctrl+u".to_string(), Action::HalfPageUp);
        bindings.insert("Ctrl+d".to_string(), Action::HalfPageDown);
        bindings.insert("PageUp".to_string(), Action::HalfPageUp);
        bindings.insert("PageDown".to_string(), Action::HalfPageDown);
        bindings.insert("g".to_string(), Action::ScrollTop);
        bindings.insert("Home".to_string(), Action::ScrollTop);
        bindings.insert("G".to_string(), Action::ScrollBottom);
        bindings.insert("End".to_string(), Action::ScrollBottom);
        bindings.insert("Tab".to_string(), Action::NextSection);
        bindings.insert("n".to_string(), Action::NextSection);
        bindings.insert("p".to_string(), Action::PrevSection);
        bindings.insert("c".to_string(), Action::Compose);
        bindings.insert("m".to_string(), Action::ToggleMotion);
        bindings.insert("?".to_string(), Action::Help);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Esc".to_string(), Action::Cancel);
        bindings.insert("Enter".to_string(), Action::Confirm);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "j/Down" or "g/Home")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Sort to ensure consistent display order (prefer shorter/simpler keys first)
        keys.sort_by(|a, b| {
            let a_simple = a.len() == 1;
            let b_simple = b.len() == 1;
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.cmp(b),
            }
        });
        keys.join("/")
    }

    /// Generate a formatted help line for an action: "  keys    description"
    #[must_use]
    pub fn help_line(&self, action: Action) -> String {
        let keys = self.format_keys(action);
        format!("  {keys:<14} {}", action.description())
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::NextSection, "section"),
            (Action::ScrollDown, "scroll"),
            (Action::Compose, "contact"),
            (Action::Help, "help"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .map(|(action, label)| {
                let mut keys = self.keys_for_action(*action);
                keys.sort_by_key(String::len);
                let key = keys.into_iter().next().unwrap_or_default();
                format!("[{key}]{label}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
