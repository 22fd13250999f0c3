//! Spend dialog
//!
//! Asks for the amount to take out of today's allowance.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

pub fn render(frame: &mut Frame, input: &TextInput) {
    let area = centered_rect_fixed(40, 6, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Record Spending ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // Amount
            Constraint::Length(1),
            Constraint::Min(1), // Hint
        ])
        .split(inner);

    frame.render_widget(
        input
            .clone()
            .label("Amount")
            .placeholder("0.00")
            .focused(true),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new("Enter to record, Esc to cancel")
            .style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}
