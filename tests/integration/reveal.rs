//! Scroll-reveal and skill-bar behavior across the whole app

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use vita::SectionId;
use vita::anim::{FILL_DURATION, STAGGER_STEP};
use vita::app::{App, Settings};
use vita::config::Config;
use vita::content::Portfolio;
use vita::tui::render::{content_width, document};

use crate::common::{build_app, document_height, even_ranges};

#[test]
fn sections_fire_as_they_scroll_into_view() {
    let now = Instant::now();
    let mut app = build_app(now);
    let ranges = even_ranges(20);
    app.viewport = (80, 24);
    app.set_layout(&ranges, document_height(20));

    // At the top only the hero and the top of the about section show.
    app.observe_visibility(&ranges, now);
    let fired: Vec<bool> = app.reveals.iter().map(|r| r.has_fired()).collect();
    assert_eq!(fired, vec![true, true, false, false, false, false, false]);

    // Walking the document fires each section exactly when it enters.
    let mut at = now;
    while app.scroll < app.max_scroll() {
        app.scroll_down(5);
        at += Duration::from_millis(50);
        app.observe_visibility(&ranges, at);
    }
    assert!(app.reveals.iter().all(vita::anim::Reveal::has_fired));
}

#[test]
fn latch_does_not_reset_when_scrolling_back() {
    let now = Instant::now();
    let mut app = build_app(now);
    let ranges = even_ranges(20);
    app.viewport = (80, 24);
    app.set_layout(&ranges, document_height(20));

    app.scroll = 60;
    app.observe_visibility(&ranges, now);
    let cert_index = SectionId::Certifications.index();
    assert!(app.reveals[cert_index].has_fired());
    let fired_at = app.reveals[cert_index].fired_at();

    app.scroll = 0;
    app.observe_visibility(&ranges, now + Duration::from_secs(3));
    assert!(app.reveals[cert_index].has_fired());
    assert_eq!(app.reveals[cert_index].fired_at(), fired_at);
}

#[test]
fn configured_threshold_delays_firing() -> anyhow::Result<()> {
    let now = Instant::now();
    let config = Config {
        reveal_threshold: 0.5,
        ..Config::default()
    };
    let mut app = App::new(config, Settings::default(), Portfolio::builtin(), now)?;
    let ranges = even_ranges(20);
    app.viewport = (80, 24);
    app.set_layout(&ranges, document_height(20));

    // Skills occupies lines 40..60. At scroll 20 the viewport bottom is
    // 44: only 4 of 20 lines visible, under the 50% threshold.
    app.scroll = 20;
    app.observe_visibility(&ranges, now);
    assert!(!app.reveals[SectionId::Skills.index()].has_fired());

    // At scroll 30 the bottom reaches 54: 14 of 20 lines, past it.
    app.scroll = 30;
    app.observe_visibility(&ranges, now);
    assert!(app.reveals[SectionId::Skills.index()].has_fired());
    Ok(())
}

#[test]
fn gauges_cascade_and_land_on_their_targets() {
    let now = Instant::now();
    let mut app = build_app(now);
    let ranges = even_ranges(20);
    app.viewport = (80, 24);
    app.set_layout(&ranges, document_height(20));

    app.scroll = 40;
    app.observe_visibility(&ranges, now);

    let targets: Vec<u8> = app
        .content
        .skills
        .technical
        .iter()
        .map(|skill| skill.percent)
        .collect();

    // Every bar ends at exactly its stored target, including the last
    // one after its stagger delay has elapsed.
    let last = targets.len() - 1;
    let all_done = now + STAGGER_STEP * u32::try_from(last).unwrap_or(u32::MAX) + FILL_DURATION;
    for (i, gauge) in app.gauges.iter().enumerate() {
        assert!((gauge.percent(all_done) - f64::from(targets[i])).abs() < f64::EPSILON);
        assert!(gauge.is_full(all_done));
    }

    // Mid-flight, a staggered bar lags the one before it.
    let mid = now + Duration::from_millis(400);
    assert!(app.gauges[0].percent(mid) > app.gauges[3].percent(mid));
}

#[test]
fn document_reveals_blank_then_content() {
    let now = Instant::now();
    let mut app = build_app(now);
    app.viewport = (80, 24);

    let width = content_width(80);
    let doc = document::build(&app, now, width);
    app.set_layout(&doc.ranges, doc.total());

    // Unobserved: the hero body renders blank lines.
    let (start, len) = doc.ranges[SectionId::Hero.index()];
    assert!(doc.lines[start..start + len]
        .iter()
        .all(|line| line.spans.is_empty()));

    // Observe, let the entrance settle, rebuild: content appears.
    app.observe_visibility(&doc.ranges, now);
    let settled = now + Duration::from_secs(1);
    let doc = document::build(&app, settled, width);
    let (start, len) = doc.ranges[SectionId::Hero.index()];
    let joined: String = doc.lines[start..start + len]
        .iter()
        .flat_map(|line| line.spans.iter().map(|span| span.content.as_ref()))
        .collect();
    assert!(joined.contains("Sivananthini Ravichandran"));
}
