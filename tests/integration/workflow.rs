//! A full browsing session driven through the action handlers

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use vita::SectionId;
use vita::app::{Actions, Field, Mode, NOTICE_DURATION};
use vita::config::Action;

use crate::common::{build_app, document_height, even_ranges};

fn type_text(
    actions: Actions,
    app: &mut vita::App,
    text: &str,
    now: Instant,
) -> anyhow::Result<()> {
    for c in text.chars() {
        actions.handle_key(app, KeyCode::Char(c), KeyModifiers::NONE, now)?;
    }
    Ok(())
}

#[test]
fn browse_compose_submit_and_quit() -> anyhow::Result<()> {
    let start = Instant::now();
    let mut app = build_app(start);
    let ranges = even_ranges(20);
    app.viewport = (80, 24);
    app.set_layout(&ranges, document_height(20));
    let actions = Actions::new();

    // The hero line types itself while the user reads.
    let mut now = start;
    for _ in 0..5 {
        now += Duration::from_millis(100);
        app.step(now);
    }
    assert_eq!(app.typewriter.display(), "Softw");

    // Scroll through the document; reveals fire as sections appear.
    app.observe_visibility(&ranges, now);
    actions.handle_action(&mut app, Action::HalfPageDown, now)?;
    actions.handle_action(&mut app, Action::HalfPageDown, now)?;
    actions.handle_action(&mut app, Action::HalfPageDown, now)?;
    app.observe_visibility(&ranges, now);
    assert!(app.reveals[SectionId::Skills.index()].has_fired());
    assert!(app.gauges.iter().all(vita::anim::Gauge::is_started));

    // Open the contact form; the view jumps to the contact section.
    actions.handle_action(&mut app, Action::Compose, now)?;
    assert_eq!(app.mode, Mode::Compose);
    assert_eq!(app.current_section(), SectionId::Contact);

    // Submitting with an empty email bounces focus to it.
    type_text(actions, &mut app, "Siva", now)?;
    actions.handle_key(&mut app, KeyCode::Enter, KeyModifiers::NONE, now)?;
    actions.handle_key(&mut app, KeyCode::Tab, KeyModifiers::NONE, now)?;
    type_text(actions, &mut app, "Hello there!", now)?;
    actions.handle_key(&mut app, KeyCode::Enter, KeyModifiers::NONE, now)?;
    assert_eq!(app.mode, Mode::Compose);
    assert_eq!(app.form.focus, Field::Email);
    assert!(app.status_message.is_some());

    // Fill the email and submit for real.
    type_text(actions, &mut app, "siva@example.com", now)?;
    actions.handle_key(&mut app, KeyCode::Tab, KeyModifiers::NONE, now)?;
    actions.handle_key(&mut app, KeyCode::Enter, KeyModifiers::NONE, now)?;
    assert_eq!(app.mode, Mode::Normal);
    assert!(app.form.name.is_empty());
    assert!(app.notice.is_armed());

    // The confirmation hides itself after its fixed delay.
    app.step(now + NOTICE_DURATION - Duration::from_millis(1));
    assert!(app.notice.is_armed());
    app.step(now + NOTICE_DURATION);
    assert!(!app.notice.is_armed());

    // Quitting cancels the typewriter; nothing mutates afterwards.
    actions.handle_action(&mut app, Action::Quit, now)?;
    assert!(app.should_quit);
    let display = app.typewriter.display().to_string();
    app.step(now + Duration::from_secs(30));
    assert_eq!(app.typewriter.display(), display);
    Ok(())
}

#[test]
fn reduced_motion_session_skips_every_animation() -> anyhow::Result<()> {
    let start = Instant::now();
    let mut app = build_app(start);
    let ranges = even_ranges(20);
    app.viewport = (80, 24);
    app.set_layout(&ranges, document_height(20));
    let actions = Actions::new();

    actions.handle_action(&mut app, Action::ToggleMotion, start)?;

    assert!(app.settings.reduce_motion);
    assert_eq!(app.typewriter.display(), "Software Enthusiast");
    assert!(app.reveals.iter().all(vita::anim::Reveal::has_fired));
    assert!(app.gauges.iter().all(|g| g.is_full(start)));

    // Quiescent: the event loop has no animation deadline to chase.
    assert_eq!(app.next_deadline(start), None);
    Ok(())
}

#[test]
fn notice_rearms_on_rapid_resubmission() -> anyhow::Result<()> {
    let start = Instant::now();
    let mut app = build_app(start);
    let actions = Actions::new();

    app.enter_mode(Mode::Compose);
    app.form.name = "a".to_string();
    app.form.email = "b".to_string();
    app.form.message = "c".to_string();
    actions.submit_contact(&mut app, start);
    assert_eq!(app.notice.due(), Some(start + NOTICE_DURATION));

    // A second submission a second later replaces the deadline.
    let later = start + Duration::from_secs(1);
    app.enter_mode(Mode::Compose);
    app.form.name = "a".to_string();
    app.form.email = "b".to_string();
    app.form.message = "c".to_string();
    actions.submit_contact(&mut app, later);
    assert_eq!(app.notice.due(), Some(later + NOTICE_DURATION));

    // The first deadline passing no longer hides the notice.
    app.step(start + NOTICE_DURATION);
    assert!(app.notice.is_armed());
    app.step(later + NOTICE_DURATION);
    assert!(!app.notice.is_armed());
    Ok(())
}
