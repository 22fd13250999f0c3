//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! screen and dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    // Windows terminals also report releases
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::Spend => handle_spend_key(app, key),
        ActiveDialog::ConfirmReset => handle_confirm_key(app, key),
        ActiveDialog::None if app.is_setup() => handle_setup_key(app, key),
        ActiveDialog::None => handle_dashboard_key(app, key),
    }
    Ok(())
}

fn handle_setup_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.setup.toggle_focus()
        }
        KeyCode::Enter => app.submit_setup(),
        _ => edit_input(app.setup.focused_input(), key),
    }
}

fn handle_dashboard_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.transfer(),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::Spend);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::ConfirmReset);
        }
        _ => {}
    }
}

fn handle_spend_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            app.clear_status();
        }
        KeyCode::Enter => app.submit_spend(),
        _ => edit_input(&mut app.spend_input, key),
    }
}

fn handle_confirm_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_reset(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            app.set_status("Reset cancelled");
        }
        _ => {}
    }
}

/// Apply an editing key to a text input
fn edit_input(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
