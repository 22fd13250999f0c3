//! TUI Views module
//!
//! The setup screen, the dashboard and the status bar.

pub mod dashboard;
pub mod setup;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::View;
use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header);

    match &app.view {
        View::Setup => setup::render(frame, app, layout.main),
        View::Dashboard(data) => dashboard::render(frame, data, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Spend => dialogs::spend::render(frame, &app.spend_input),
        ActiveDialog::ConfirmReset => {
            dialogs::confirm::render(frame, "Erase all balances and history?")
        }
        ActiveDialog::None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " daybudget ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" daily allowance tracker", Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}
