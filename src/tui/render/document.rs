//! Document composition and the reveal fade
//!
//! The portfolio renders as one long document of styled lines. Each
//! section records its `(start, len)` line range so the app can measure
//! visibility against the scroll offset, and the section's reveal
//! progress maps onto the built lines as a fade (muted, dim, then the
//! section's own colors) plus a shrinking slide indent. Unfired sections
//! keep their height but render blank, like a block waiting off-screen.

use std::time::Instant;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::{App, SectionId};

use super::{colors, sections};

/// Indent the slide starts from, in cells.
const SLIDE_CELLS: usize = 2;

/// The fully composed document for one frame.
#[derive(Debug, Default)]
pub struct Document {
    /// Styled lines, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// `(start, len)` per section, parallel to [`SectionId::ALL`].
    pub ranges: Vec<(usize, usize)>,
}

impl Document {
    /// Document height in lines.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.lines.len()
    }
}

/// Compose the document at `width` content columns.
#[must_use]
pub fn build(app: &App, now: Instant, width: usize) -> Document {
    let mut doc = Document::default();

    for &id in SectionId::ALL {
        let built = build_section(app, id, now, width);
        let progress = app
            .reveals
            .get(id.index())
            .map_or(1.0, |reveal| reveal.progress(now));
        let revealed = apply_reveal(built, progress);

        let start = doc.lines.len();
        doc.ranges.push((start, revealed.len()));
        doc.lines.extend(revealed);
    }

    doc
}

fn build_section(app: &App, id: SectionId, now: Instant, width: usize) -> Vec<Line<'static>> {
    match id {
        SectionId::Hero => sections::hero(app),
        SectionId::About => sections::about(app, width),
        SectionId::Skills => sections::skills(app, now, width),
        SectionId::Certifications => sections::certifications(app),
        SectionId::Experience => sections::experience(app, width),
        SectionId::Projects => sections::projects(app, width),
        SectionId::Contact => sections::contact(app),
    }
}

/// Map a section's entrance progress onto its lines.
fn apply_reveal(lines: Vec<Line<'static>>, progress: f64) -> Vec<Line<'static>> {
    if progress >= 1.0 {
        return lines;
    }
    if progress <= 0.0 {
        // Unfired: keep the height, show nothing.
        return lines.iter().map(|_| Line::default()).collect();
    }

    let indent = slide_indent(progress);
    let overlay = fade_color(progress);
    lines
        .into_iter()
        .map(|line| {
            let mut spans = Vec::with_capacity(line.spans.len() + 1);
            if indent > 0 {
                spans.push(Span::raw(" ".repeat(indent)));
            }
            for span in line.spans {
                match overlay {
                    Some(color) => {
                        spans.push(Span::styled(span.content, Style::default().fg(color)));
                    }
                    None => spans.push(span),
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// Fade step for a mid-entrance section; `None` keeps the real colors.
fn fade_color(progress: f64) -> Option<ratatui::style::Color> {
    if progress < 1.0 / 3.0 {
        Some(colors::TEXT_MUTED)
    } else if progress < 2.0 / 3.0 {
        Some(colors::TEXT_DIM)
    } else {
        None
    }
}

/// Slide offset, shrinking from [`SLIDE_CELLS`] to zero as the
/// entrance completes.
fn slide_indent(progress: f64) -> usize {
    let remaining = (1.0 - progress).clamp(0.0, 1.0);
    let bar = u32::try_from(SLIDE_CELLS).unwrap_or(u32::MAX);
    let scaled = (remaining * f64::from(bar)).ceil();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "scaled is clamped to 0..=SLIDE_CELLS before the cast"
    )]
    let cells = scaled.clamp(0.0, f64::from(bar)) as usize;
    cells
}
