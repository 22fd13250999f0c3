//! Dashboard view model
//!
//! Turns the ledger state into display-ready values. Shared by the text
//! output of the CLI and the TUI widgets; no ledger logic lives here.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{AccountKind, Balances, Money};
use crate::storage::LedgerState;

use super::transaction::{format_transaction_row, TransactionLine, EMPTY_HISTORY_MESSAGE};

/// Which screen to show
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Ledger not initialized: ask for a starting balance and daily limit
    Setup,
    Dashboard(Dashboard),
}

impl View {
    pub fn build(state: &LedgerState, settings: &Settings) -> Self {
        if state.initialized {
            View::Dashboard(Dashboard::build(state, settings))
        } else {
            View::Setup
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub balances: Balances,
    /// Balances with currency symbol, in main/daily/savings order
    pub formatted: [(AccountKind, String); 3],
    /// Remaining daily allowance as a share of the limit, 0-100
    pub progress_percent: f64,
    pub remaining: String,
    pub daily_limit: String,
    pub last_transfer_date: Option<NaiveDate>,
    pub recent: Vec<TransactionLine>,
}

impl Dashboard {
    pub fn build(state: &LedgerState, settings: &Settings) -> Self {
        let balances = state.balances;
        let fmt = |amount: Money| settings.format_money(amount);

        Self {
            balances,
            formatted: [
                (AccountKind::Main, fmt(balances.main)),
                (AccountKind::Daily, fmt(balances.daily)),
                (AccountKind::Savings, fmt(balances.savings)),
            ],
            progress_percent: progress_percent(balances.daily, state.daily_limit),
            remaining: fmt(balances.daily),
            daily_limit: fmt(state.daily_limit),
            last_transfer_date: state.last_transfer_date,
            recent: state
                .transactions
                .recent(settings.recent_transactions)
                .iter()
                .map(|txn| TransactionLine::new(txn, settings))
                .collect(),
        }
    }

    pub fn formatted_balance(&self, account: AccountKind) -> &str {
        self.formatted
            .iter()
            .find(|(kind, _)| *kind == account)
            .map(|(_, s)| s.as_str())
            .unwrap_or_default()
    }
}

/// `min(daily / limit, 1)` as a percentage
///
/// Clamped at 100 when the daily balance exceeds a lowered limit, and 0 when
/// the limit is not positive.
pub fn progress_percent(daily: Money, limit: Money) -> f64 {
    (daily.ratio_of(limit).min(1.0) * 100.0).max(0.0)
}

/// Plain-text progress bar: `[██████░░░░] 60%`
pub fn format_progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}

/// Render the dashboard as text
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let mut output = String::new();

    for (account, amount) in &dashboard.formatted {
        output.push_str(&format!("{:16} {:>14}\n", account.title(), amount));
    }
    output.push('\n');

    output.push_str(&format!(
        "Today: {} of {} remaining\n",
        dashboard.remaining, dashboard.daily_limit
    ));
    output.push_str(&format_progress_bar(dashboard.progress_percent, 30));
    output.push('\n');
    if let Some(date) = dashboard.last_transfer_date {
        output.push_str(&format!("Last settled: {}\n", date.format("%Y-%m-%d")));
    }
    output.push('\n');

    output.push_str("Recent Transactions\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    if dashboard.recent.is_empty() {
        output.push_str(EMPTY_HISTORY_MESSAGE);
        output.push('\n');
    } else {
        for line in &dashboard.recent {
            output.push_str(&format_transaction_row(line));
            output.push('\n');
        }
    }

    output
}

/// Text shown when the ledger has not been set up
pub fn format_setup() -> String {
    let mut output = String::new();
    output.push_str("No budget set up yet.\n\n");
    output.push_str("Start with your main balance and daily spending limit:\n");
    output.push_str("  daybudget init <main-balance> <daily-limit>\n\n");
    output.push_str("or run 'daybudget tui' for the interactive setup.\n");
    output
}

/// Render whichever view applies
pub fn format_view(view: &View) -> String {
    match view {
        View::Setup => format_setup(),
        View::Dashboard(dashboard) => format_dashboard(dashboard),
    }
}
