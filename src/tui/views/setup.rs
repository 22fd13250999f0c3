//! Setup view
//!
//! Shown while the ledger is uninitialized: asks for the starting main
//! balance and the daily limit.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, SetupField};
use crate::tui::layout::centered_rect_fixed;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let area = centered_rect_fixed(56, 10, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set up your budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Intro
            Constraint::Length(1),
            Constraint::Length(1), // Main balance
            Constraint::Length(1), // Daily limit
            Constraint::Length(1),
            Constraint::Min(1), // Hint
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(
            "How much is in your main account, and how much per day?",
        ))
        .style(Style::default().fg(Color::White)),
        rows[0],
    );

    let focus = app.setup.focus;
    frame.render_widget(
        app.setup
            .main_balance
            .clone()
            .label("Main balance")
            .placeholder("e.g. 1000")
            .focused(focus == SetupField::MainBalance),
        rows[2],
    );
    frame.render_widget(
        app.setup
            .daily_limit
            .clone()
            .label("Daily limit ")
            .placeholder("e.g. 150")
            .focused(focus == SetupField::DailyLimit),
        rows[3],
    );

    frame.render_widget(
        Paragraph::new("Tab switches field, Enter starts tracking")
            .style(Style::default().fg(Color::DarkGray)),
        rows[5],
    );
}
