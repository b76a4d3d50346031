//! Shared helpers for integration tests

use std::time::Instant;

use vita::app::{App, Settings};
use vita::config::Config;
use vita::content::Portfolio;

/// Build an app from the built-in content.
pub fn build_app(now: Instant) -> App {
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

/// Synthetic section layout: `lines` lines per section, back to back,
/// parallel to `SectionId::ALL`.
pub fn even_ranges(lines: usize) -> Vec<(usize, usize)> {
    (0..vita::SectionId::ALL.len())
        .map(|i| (i * lines, lines))
        .collect()
}

/// Total height of [`even_ranges`].
pub fn document_height(lines: usize) -> usize {
    vita::SectionId::ALL.len() * lines
}
