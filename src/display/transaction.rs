//! Transaction display formatting
//!
//! Rows for the dashboard's recent list and the full history table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Transaction, TransactionLog};

/// Shown in place of the list when the log is empty
pub const EMPTY_HISTORY_MESSAGE: &str = "No transactions yet";

/// One transaction, formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLine {
    pub description: String,
    /// Signed amount with currency symbol: "-₹40.00", "+₹150.00"
    pub amount: String,
    pub timestamp: String,
    pub is_debit: bool,
}

impl TransactionLine {
    pub fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            description: txn.description.clone(),
            amount: txn.signed_amount().format_signed(&settings.currency_symbol),
            timestamp: settings.format_timestamp(txn.timestamp),
            is_debit: txn.is_debit(),
        }
    }
}

/// Format a single line for the recent-transactions list
pub fn format_transaction_row(line: &TransactionLine) -> String {
    format!(
        "{:26} {:>14}  {}",
        truncate(&line.description, 26),
        line.amount,
        line.timestamp
    )
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the whole log (up to the history limit) as a table, newest first
pub fn format_history_table(log: &TransactionLog, limit: usize, settings: &Settings) -> String {
    if log.is_empty() {
        return format!("{}.\n", EMPTY_HISTORY_MESSAGE);
    }

    let rows = log.recent(limit).iter().map(|txn| {
        let line = TransactionLine::new(txn, settings);
        HistoryRow {
            id: txn.id.to_string(),
            time: line.timestamp,
            description: line.description,
            account: txn.account.to_string(),
            amount: line.amount,
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    output.push('\n');
    if limit < log.len() {
        output.push_str(&format!("Showing {} of {} transactions.\n", limit, log.len()));
    }
    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
