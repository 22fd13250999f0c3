//! Display formatting for terminal output
//!
//! Pure formatting of ledger state: balances, the daily progress ratio and
//! recent transactions. Nothing here mutates the ledger.

pub mod dashboard;
pub mod transaction;

pub use dashboard::{
    format_dashboard, format_progress_bar, format_view, progress_percent, Dashboard, View,
};
pub use transaction::{
    format_history_table, format_transaction_row, TransactionLine, EMPTY_HISTORY_MESSAGE,
};
