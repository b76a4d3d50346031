//! Help overlay and the contact confirmation notice

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::config::{Action, ActionGroup};

use super::{centered_rect_absolute, colors};

/// Render the help overlay with the current keybindings.
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut group: Option<ActionGroup> = None;

    for &action in Action::ALL_FOR_HELP {
        if group != Some(action.group()) {
            group = Some(action.group());
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                action.group().title().to_string(),
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(Span::styled(
            app.config.keys.help_line(action),
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  1-7            Jump to a section".to_string(),
        Style::default().fg(colors::TEXT_PRIMARY),
    )));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect_absolute(46, height, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(colors::MODAL_BG))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::BORDER))
                    .title(" Help "),
            ),
        area,
    );
}

/// Render the "message sent" confirmation notice.
pub fn render_notice_overlay(frame: &mut Frame<'_>) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "  ✔ Your message was sent successfully!",
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Thank you for reaching out.",
            Style::default().fg(colors::TEXT_PRIMARY),
        )),
        Line::default(),
        Line::from(Span::styled(
            "  Esc to dismiss",
            Style::default().fg(colors::TEXT_MUTED),
        )),
    ];

    let area = centered_rect_absolute(46, 7, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(colors::MODAL_BG))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::SUCCESS)),
            ),
        area,
    );
}
