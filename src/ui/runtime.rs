use std::io;
use std::time::Duration;

use crate::session::SessionState;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(fresh: bool) -> io::Result<()> {
    let session = if fresh {
        SessionState::default()
    } else {
        SessionState::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not restore session, starting fresh");
            SessionState::default()
        })
    };
    let mut app = App::from_session(&session);
    tracing::info!(depth = app.nav().depth(), "session restored");

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            // ratatui picks up the new size on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);

    if let Err(err) = app.session_state().save() {
        tracing::error!(%err, "failed to save session");
    } else {
        tracing::info!(depth = app.nav().depth(), "session saved");
    }

    Ok(())
}
