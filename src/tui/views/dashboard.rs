//! Dashboard view
//!
//! Balance panels, today's allowance gauge and the recent transactions.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::display::{Dashboard, EMPTY_HISTORY_MESSAGE};
use crate::models::AccountKind;
use crate::tui::layout::DashboardLayout;

pub fn render(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let layout = DashboardLayout::new(area);

    for ((account, amount), panel) in dashboard.formatted.iter().zip(layout.balances) {
        render_balance(frame, *account, amount, panel);
    }

    render_gauge(frame, dashboard, layout.gauge);
    render_transactions(frame, dashboard, layout.transactions);
}

fn account_color(account: AccountKind) -> Color {
    match account {
        AccountKind::Main => Color::Blue,
        AccountKind::Daily => Color::Yellow,
        AccountKind::Savings => Color::Green,
    }
}

fn render_balance(frame: &mut Frame, account: AccountKind, amount: &str, area: Rect) {
    let color = account_color(account);
    let block = Block::default()
        .title(format!(" {} ", account.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Paragraph::new(Line::from(Span::styled(
        amount.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .centered();

    frame.render_widget(text, area);
}

fn render_gauge(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let color = if dashboard.progress_percent <= 25.0 {
        Color::Red
    } else if dashboard.progress_percent <= 50.0 {
        Color::Yellow
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Today's allowance ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(dashboard.progress_percent.round().clamp(0.0, 100.0) as u16)
        .label(format!(
            "{} of {} remaining",
            dashboard.remaining, dashboard.daily_limit
        ));

    frame.render_widget(gauge, area);
}

fn render_transactions(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let block = Block::default()
        .title(" Recent Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if dashboard.recent.is_empty() {
        let empty = Paragraph::new(EMPTY_HISTORY_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = dashboard
        .recent
        .iter()
        .map(|line| {
            let amount_color = if line.is_debit {
                Color::Red
            } else {
                Color::Green
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<28}", line.description),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>14}", line.amount),
                    Style::default().fg(amount_color),
                ),
                Span::styled(
                    format!("  {}", line.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
