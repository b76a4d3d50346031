//! Terminal lifecycle for Vita
//!
//! Raw mode and alternate screen setup, the event loop, and teardown.
//! The loop is deadline-aware: each pass steps the animators with the
//! current instant, rebuilds the document, feeds section visibility to
//! the reveal latches, draws, then sleeps no longer than the next
//! animation deadline.

pub mod render;

use anyhow::Result;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;

use crate::app::{Actions, App, Event, Handler};
use render::document;

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or an event loop
/// pass fails
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    let action_handler = Actions::new();

    let result = run_loop(&mut terminal, &mut app, &event_handler, action_handler);

    // The typewriter must not outlive the view.
    app.typewriter.cancel();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
    action_handler: Actions,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.step(now);

        let size = terminal.size()?;
        app.viewport = (size.width, render::body_height(size.height));

        let doc = document::build(app, now, render::content_width(size.width));
        app.set_layout(&doc.ranges, doc.total());
        app.observe_visibility(&doc.ranges, now);

        terminal.draw(|frame| render::render(frame, app, &doc))?;

        match event_handler.next_before(app.next_deadline(Instant::now()))? {
            Event::Tick => {}
            Event::Key(key) => {
                // Ignore key releases on terminals that report them.
                if key.kind != KeyEventKind::Release {
                    action_handler.handle_key(app, key.code, key.modifiers, Instant::now())?;
                }
            }
            Event::Mouse(mouse) => action_handler.handle_mouse(app, &mouse),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
