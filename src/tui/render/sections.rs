//! Per-section line builders
//!
//! Each builder turns one content section into styled lines at a given
//! content width. Builders are deterministic for a `(content, width,
//! animation state)` triple; the document module composes them and the
//! reveal fade is applied on top.

use chrono::Datelike;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::{App, Field, Mode};

use super::colors;

/// Width of a skill bar in cells.
const BAR_WIDTH: usize = 24;

/// Build the hero section: name, typed role line, social links.
#[must_use]
pub fn hero(app: &App) -> Vec<Line<'static>> {
    let profile = &app.content.profile;
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            profile.tagline.clone(),
            Style::default().fg(colors::TEXT_DIM),
        )),
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        typed_role_line(app),
        Line::default(),
    ];

    for link in &profile.links {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", link.label),
                Style::default().fg(colors::ACCENT_ALT),
            ),
            Span::styled(link.url.clone(), Style::default().fg(colors::TEXT_DIM)),
        ]));
    }
    lines.push(Line::default());
    lines
}

/// The "I'm a …" line driven by the typewriter, with a block cursor.
fn typed_role_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled("I'm a ", Style::default().fg(colors::TEXT_PRIMARY)),
        Span::styled(
            app.typewriter.display().to_string(),
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▏", Style::default().fg(colors::ACCENT)),
    ])
}

/// Build the about section: education cards plus the biography.
#[must_use]
pub fn about(app: &App, width: usize) -> Vec<Line<'static>> {
    let mut lines = header("About Me", "Get To Know More");

    for entry in &app.content.about.education {
        lines.push(Line::from(Span::styled(
            format!("▪ {}", entry.school),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        for detail in &entry.lines {
            lines.push(Line::from(Span::styled(
                format!("  {detail}"),
                Style::default().fg(colors::TEXT_DIM),
            )));
        }
        lines.push(Line::default());
    }

    for row in wrap(&app.content.about.summary, width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }
    lines.push(Line::default());
    lines
}

/// Build the skills section: animated bars, soft skills, tools.
#[must_use]
pub fn skills(app: &App, now: std::time::Instant, width: usize) -> Vec<Line<'static>> {
    let mut lines = header("Skills", "Get To Know More");

    lines.push(subheading("Technical Skills"));
    for (i, skill) in app.content.skills.technical.iter().enumerate() {
        let percent = app.gauges.get(i).map_or(0.0, |g| g.percent(now));
        lines.push(bar_line(&skill.name, percent, skill.percent));
    }
    lines.push(Line::default());

    lines.push(subheading("Soft Skills"));
    for pair in app.content.skills.soft.chunks(2) {
        let mut spans = Vec::new();
        for soft in pair {
            spans.push(Span::styled("✔ ", Style::default().fg(colors::SUCCESS)));
            spans.push(Span::styled(
                format!("{soft:<24}"),
                Style::default().fg(colors::TEXT_PRIMARY),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());

    lines.push(subheading("Tools"));
    for row in wrap(&app.content.skills.tools.join(" · "), width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(colors::TEXT_DIM),
        )));
    }
    lines.push(Line::default());
    lines
}

/// One "name  [████░░] 85%" bar at the gauge's current fill.
fn bar_line(name: &str, percent: f64, target: u8) -> Line<'static> {
    let filled = cells(percent, BAR_WIDTH);
    Line::from(vec![
        Span::styled(
            format!("{name:<14}"),
            Style::default().fg(colors::TEXT_PRIMARY),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(colors::BAR_FILL)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(colors::BAR_EMPTY),
        ),
        Span::styled(
            format!(" {target:>3}%"),
            Style::default().fg(colors::TEXT_DIM),
        ),
    ])
}

/// Filled cells for a percentage of a bar, never exceeding the bar.
fn cells(percent: f64, bar_width: usize) -> usize {
    let bar = u32::try_from(bar_width).unwrap_or(u32::MAX);
    let scaled = (percent / 100.0 * f64::from(bar)).round();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "scaled is clamped to 0..=bar_width before the cast"
    )]
    let filled = scaled.clamp(0.0, f64::from(bar)) as usize;
    filled
}

/// Build the certifications section.
#[must_use]
pub fn certifications(app: &App) -> Vec<Line<'static>> {
    let mut lines = header("Certifications", "What I Have Earned");

    for cert in &app.content.certifications {
        lines.push(Line::from(Span::styled(
            cert.name.clone(),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  Issued By: {} · {}", cert.issuer, cert.date),
            Style::default().fg(colors::TEXT_DIM),
        )));
        lines.push(Line::default());
    }
    lines
}

/// Build the experience section.
#[must_use]
pub fn experience(app: &App, width: usize) -> Vec<Line<'static>> {
    let mut lines = header("Experience", "Where I Have Worked");

    for exp in &app.content.experience {
        lines.push(Line::from(Span::styled(
            exp.role.clone(),
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(exp.company.clone(), Style::default().fg(colors::ACCENT_ALT)),
            Span::styled(
                format!("  {}", exp.period),
                Style::default().fg(colors::TEXT_DIM),
            ),
        ]));
        for row in wrap(&exp.description, width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(colors::TEXT_PRIMARY),
            )));
        }
        lines.push(Line::default());
    }
    lines
}

/// Build the projects section.
#[must_use]
pub fn projects(app: &App, width: usize) -> Vec<Line<'static>> {
    let mut lines = header("Projects", "What I Have Built");

    for project in &app.content.projects {
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        for row in wrap(&project.description, width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(colors::TEXT_DIM),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled("  code ", Style::default().fg(colors::ACCENT_ALT)),
            Span::styled(
                project.github.clone(),
                Style::default().fg(colors::TEXT_DIM),
            ),
        ]));
        if let Some(demo) = &project.demo {
            lines.push(Line::from(vec![
                Span::styled("  demo ", Style::default().fg(colors::ACCENT_ALT)),
                Span::styled(demo.clone(), Style::default().fg(colors::TEXT_DIM)),
            ]));
        }
        lines.push(Line::default());
    }
    lines
}

/// Build the contact section: channels, the message form, the footer.
#[must_use]
pub fn contact(app: &App) -> Vec<Line<'static>> {
    let mut lines = header("Contact", "Get In Touch");

    for info in &app.content.contact {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", info.label),
                Style::default().fg(colors::ACCENT_ALT),
            ),
            Span::styled(info.value.clone(), Style::default().fg(colors::TEXT_PRIMARY)),
            Span::styled(
                format!("  {}", info.link),
                Style::default().fg(colors::TEXT_MUTED),
            ),
        ]));
    }
    lines.push(Line::default());

    for &field in Field::ALL {
        lines.push(form_field_line(app, field));
    }
    lines.push(form_hint_line(app));
    lines.push(Line::default());

    let year = chrono::Local::now().year();
    lines.push(Line::from(Span::styled(
        format!("© {year} {}. All Rights Reserved.", app.content.profile.name),
        Style::default().fg(colors::TEXT_MUTED),
    )));
    lines.push(Line::default());
    lines
}

/// One form field rendered as "label  value", highlighted when focused.
fn form_field_line(app: &App, field: Field) -> Line<'static> {
    let composing = app.mode == Mode::Compose;
    let focused = composing && app.form.focus == field;
    let marker = if focused { "▸ " } else { "  " };
    let value = app.form.value(field).clone();

    let value_style = if focused {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(colors::INPUT_FOCUS_BG)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY).bg(colors::INPUT_BG)
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(colors::TAB_ACTIVE)),
        Span::styled(
            format!("{:<14}", field.label()),
            Style::default().fg(colors::TEXT_DIM),
        ),
        Span::styled(format!(" {value}"), value_style),
    ];
    if focused {
        spans.push(Span::styled("▏", value_style.fg(colors::TAB_ACTIVE)));
    }
    Line::from(spans)
}

/// The instruction line under the form.
fn form_hint_line(app: &App) -> Line<'static> {
    let hint = if app.mode == Mode::Compose {
        "  Enter next/submit · Tab switch field · Esc cancel"
    } else {
        "  press c to write a message"
    };
    Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(colors::TEXT_MUTED),
    ))
}

/// Section eyebrow and title, matching every section's opening.
fn header(title: &str, eyebrow: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            eyebrow.to_string(),
            Style::default().fg(colors::TEXT_MUTED),
        )),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ]
}

/// A bolded subheading within a section.
fn subheading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Greedy word wrap at `width` characters.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if row_chars > 0 && row_chars + 1 + word_chars > width {
            rows.push(std::mem::take(&mut row));
            row_chars = 0;
        }
        if row_chars > 0 {
            row.push(' ');
            row_chars += 1;
        }
        row.push_str(word);
        row_chars += word_chars;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
