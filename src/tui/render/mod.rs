//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `sections`: Per-section line builders
//! - `document`: Document composition and the reveal fade
//! - `overlays`: Help overlay and the contact confirmation notice

pub mod colors;
pub mod document;
pub mod overlays;
pub mod sections;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::app::{App, Mode, SectionId};
use document::Document;

/// Rows reserved for the navbar.
const NAVBAR_HEIGHT: u16 = 3;

/// Rows reserved for the status bar.
const STATUS_HEIGHT: u16 = 1;

/// Content width for a terminal `total` cells wide.
#[must_use]
pub fn content_width(total: u16) -> usize {
    usize::from(total).saturating_sub(4).clamp(20, 100)
}

/// Document viewport height for a terminal `total` cells tall.
#[must_use]
pub const fn body_height(total: u16) -> u16 {
    total.saturating_sub(NAVBAR_HEIGHT + STATUS_HEIGHT)
}

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App, doc: &Document) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    render_navbar(frame, app, chunks[0]);
    render_document(frame, app, doc, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    if app.mode == Mode::Help {
        overlays::render_help_overlay(frame, app);
    }
    if app.notice.is_armed() {
        overlays::render_notice_overlay(frame);
    }
}

/// Render the navbar: logo row, section tabs, separator.
///
/// Once the document is scrolled past the threshold the bar flips to a
/// solid background, like the original site's navbar over the video.
fn render_navbar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let scrolled = app.is_scrolled();
    let base = if scrolled {
        Style::default()
            .fg(colors::NAVBAR_SCROLLED_FG)
            .bg(colors::NAVBAR_SCROLLED_BG)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY)
    };

    let logo = Line::from(vec![
        Span::styled(
            format!(" {}", app.content.profile.name),
            base.add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        Span::styled(" · terminal portfolio", base.add_modifier(Modifier::DIM)),
    ]);

    let current = app.current_section();
    let mut tabs = vec![Span::styled(" ".to_string(), base)];
    for (i, &section) in SectionId::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.title());
        let style = if section == current {
            base.fg(colors::TAB_ACTIVE).add_modifier(Modifier::BOLD)
        } else {
            base.add_modifier(Modifier::DIM)
        };
        tabs.push(Span::styled(label, style));
    }

    let separator = Line::from(Span::styled(
        "─".repeat(usize::from(area.width)),
        Style::default().fg(colors::BORDER),
    ));

    let paragraph = Paragraph::new(Text::from(vec![logo, Line::from(tabs), separator])).style(
        if scrolled {
            Style::default().bg(colors::NAVBAR_SCROLLED_BG)
        } else {
            Style::default()
        },
    );
    frame.render_widget(paragraph, area);
}

/// Render the visible window of the document.
fn render_document(frame: &mut Frame<'_>, app: &App, doc: &Document, area: Rect) {
    let window: Vec<Line<'static>> = doc
        .lines
        .iter()
        .skip(app.scroll)
        .take(usize::from(area.height))
        .cloned()
        .collect();

    let inner = Rect {
        x: area.x.saturating_add(2),
        y: area.y,
        width: area.width.saturating_sub(4),
        height: area.height,
    };
    frame.render_widget(Paragraph::new(Text::from(window)), inner);
}

/// Render the status bar: message or hints left, position right.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let left = app.status_message.clone().unwrap_or_else(|| match app.mode {
        Mode::Normal => format!("{} [1-7]jump", app.config.keys.status_hints()),
        Mode::Compose => "composing · Enter submits from the message field · Esc cancels"
            .to_string(),
        Mode::Help => "Esc closes help".to_string(),
    });
    let right = scroll_position(app);

    let pad = usize::from(area.width)
        .saturating_sub(left.chars().count() + right.chars().count() + 2);
    let line = Line::from(vec![
        Span::styled(format!(" {left}"), Style::default().fg(colors::TEXT_DIM)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(colors::TEXT_MUTED)),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Human scroll position: Top, Bot, or a percentage.
fn scroll_position(app: &App) -> String {
    let max = app.max_scroll();
    if app.scroll == 0 {
        "Top".to_string()
    } else if app.scroll >= max {
        "Bot".to_string()
    } else {
        format!("{}%", app.scroll * 100 / max.max(1))
    }
}

/// A centered rectangle of absolute size, clamped to `area`.
#[must_use]
pub fn centered_rect_absolute(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
