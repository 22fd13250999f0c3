//! Status bar view
//!
//! Shows the latest status message and key hints for the current screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::View;
use crate::storage::KeyValueStore;
use crate::tui::app::{ActiveDialog, App, StatusKind};
use crate::tui::keybindings::{hint_line, KeyContext};

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![];

    match &app.status {
        Some(message) => {
            let color = match message.kind {
                StatusKind::Info => Color::Green,
                StatusKind::Warning => Color::Yellow,
                StatusKind::Error => Color::Red,
            };
            spans.push(Span::styled(
                format!(" {}", message.text),
                Style::default().fg(color),
            ));
        }
        None => {
            if let View::Dashboard(dashboard) = &app.view {
                if let Some(date) = dashboard.last_transfer_date {
                    spans.push(Span::styled(
                        format!(" Last settled: {}", date.format("%Y-%m-%d")),
                        Style::default().fg(Color::Cyan),
                    ));
                }
            }
        }
    }

    let context = match app.active_dialog {
        ActiveDialog::Spend => KeyContext::SpendDialog,
        ActiveDialog::ConfirmReset => KeyContext::ConfirmDialog,
        ActiveDialog::None if app.is_setup() => KeyContext::Setup,
        ActiveDialog::None => KeyContext::Dashboard,
    };
    let hints = format!(" {} ", hint_line(context));

    // Right-align the hints
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
