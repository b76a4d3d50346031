//! In-memory contact form state
//!
//! Three text fields and a focus marker. Nothing is persisted or sent
//! anywhere; a valid submission only resets the form and pops the
//! confirmation notice.

/// The contact form's fields, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    /// Sender name.
    #[default]
    Name,
    /// Sender email address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// All fields in tab order.
    pub const ALL: &'static [Self] = &[Self::Name, Self::Email, Self::Message];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }

    /// The field after this one, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// The field before this one, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// Contact form buffers plus the focused field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name buffer.
    pub name: String,
    /// Sender email buffer.
    pub email: String,
    /// Message buffer.
    pub message: String,
    /// Currently focused field.
    pub focus: Field,
}

impl ContactForm {
    /// The buffer for `field`.
    #[must_use]
    pub const fn value(&self, field: Field) -> &String {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Mutable buffer for `field`.
    pub const fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Append a character to the focused field.
    pub fn insert(&mut self, c: char) {
        self.value_mut(self.focus).push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.value_mut(self.focus).pop();
    }

    /// Move focus to the next field.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub const fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The first field that is empty after trimming, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Field> {
        Field::ALL
            .iter()
            .copied()
            .find(|&field| self.value(field).trim().is_empty())
    }

    /// Whether every field has non-whitespace content.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Reset all buffers and focus.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = Field::Name;
    }
}
