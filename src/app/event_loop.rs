//! The UI event loop.

use std::io::{self, Stdout};

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::SduiError;
use crate::loader::{LoadState, TreeLoad};
use crate::ui;

use super::App;

enum LoopEvent {
    Input(Option<io::Result<Event>>),
    Loaded(LoadState),
}

/// Run until the user quits or a fatal error occurs.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), SduiError> {
    let mut events = EventStream::new();

    while !app.should_quit() {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        let event = tokio::select! {
            input = events.next() => LoopEvent::Input(input),
            result = wait_for(app.pending_mut()) => LoopEvent::Loaded(result),
        };

        match event {
            LoopEvent::Input(Some(Ok(Event::Key(key)))) => app.handle_key(key)?,
            LoopEvent::Input(Some(Ok(Event::Resize(..)))) => app.mark_dirty(),
            LoopEvent::Input(Some(Ok(_))) => {}
            LoopEvent::Input(Some(Err(e))) => return Err(e.into()),
            LoopEvent::Input(None) => break,
            LoopEvent::Loaded(result) => app.finish_load(result)?,
        }
    }
    Ok(())
}

async fn wait_for(pending: &mut Option<TreeLoad>) -> LoadState {
    match pending {
        Some(load) => load.finished().await,
        None => std::future::pending().await,
    }
}
