//! Terminal setup and teardown
//!
//! Initializes raw mode and the alternate screen, restores them on exit,
//! and installs a panic hook that restores the terminal first.

use anyhow::{anyhow, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::settings::Settings;
use crate::error::TrackerError;
use crate::store::TransactionStore;

use super::app::{ActiveView, App};
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_error)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend).map_err(tui_error)?)
}

fn tui_error(e: io::Error) -> TrackerError {
    TrackerError::Tui(format!("Failed to set up terminal: {}", e))
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(store: &dyn TransactionStore, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, store, settings);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, store: &dyn TransactionStore, settings: &Settings) -> Result<()> {
    let mut app = App::new(store, settings);
    app.switch_view(ActiveView::Register);
    info!(backend = %store.backend(), "tui started");

    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| super::views::render(frame, &app))?;

        match events.next()? {
            Event::Error(message) => return Err(anyhow!("terminal input failed: {}", message)),
            event => handle_event(&mut app, event),
        }

        if app.should_quit {
            break;
        }
    }

    info!("tui stopped");
    Ok(())
}
