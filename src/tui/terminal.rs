//! Entering and leaving the dashboard
//!
//! Raw mode and the alternate screen are switched on for the session and
//! restored on exit, or from the panic hook if rendering panics.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::clock::Clock;
use crate::config::Settings;
use crate::storage::{KeyValueStore, Ledger};

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode on the alternate screen
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Leave raw mode and the alternate screen
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
///
/// The caller runs the day-boundary check before starting; afterwards the
/// app re-checks on each tick.
pub fn run_tui<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    clock: &dyn Clock,
) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, App::new(ledger, settings, clock));
    restore_terminal()?;
    result
}

fn event_loop<S: KeyValueStore>(terminal: &mut Tui, mut app: App<'_, S>) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;

        match events.next()? {
            Event::Resize(_, _) => {
                // Redrawn on the next loop iteration
            }
            event => handle_event(&mut app, event)?,
        }
    }

    Ok(())
}
