//! Terminal host for the widget.
//!
//! Plays the part of the page that embeds the widget: it draws the published
//! view and turns key presses and mouse clicks into controller messages.

pub mod app;
pub mod ui;

use crate::actors::SearchWidget;
use crate::error::Result;
use crate::view::View;
use app::App;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::execute;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::io::stdout;
use tracing::{debug, info, warn};

/// Run the widget until the user quits, then dispose of the controller.
///
/// Returns the last view seen, so the caller can report what was pinned.
pub async fn run(widget: SearchWidget) -> Result<View> {
    let mut terminal = ratatui::try_init()?;
    let result = match execute!(stdout(), EnableMouseCapture) {
        Ok(()) => event_loop(&mut terminal, &widget).await,
        Err(e) => Err(e.into()),
    };
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    let view = result?;
    widget.dispose().await?;
    Ok(view)
}

async fn event_loop(terminal: &mut DefaultTerminal, widget: &SearchWidget) -> Result<View> {
    let mut snapshots = widget.subscribe();
    let mut app = App::new(snapshots.borrow_and_update().clone());
    let mut events = EventStream::new();

    info!("Terminal host started");

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    debug!("View feed closed");
                    break;
                }
                app.set_view(snapshots.borrow_and_update().clone());
            }
            event = events.next() => {
                match event {
                    Some(Ok(event)) => {
                        for message in app.handle_event(event) {
                            widget.send(message)?;
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!(pinned = app.view.pinned_count(), "Terminal host stopped");
    Ok(app.view)
}
