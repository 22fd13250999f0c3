//! CLI command handlers for read-only views
//!
//! Status dashboard, transaction history and the audit log.

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::{format_history_table, format_view, View};
use crate::error::BudgetResult;
use crate::models::HISTORY_LIMIT;
use crate::storage::{KeyValueStore, Ledger};

/// Handle the status command
pub fn handle_status_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    let state = ledger.load()?;
    print!("{}", format_view(&View::build(&state, settings)));
    Ok(())
}

/// Handle the history command
pub fn handle_history_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    limit: Option<usize>,
) -> BudgetResult<()> {
    let log = ledger.transactions()?;
    let limit = limit.unwrap_or(HISTORY_LIMIT);

    print!("{}", format_history_table(&log, limit, settings));
    Ok(())
}

/// Handle the audit command
pub fn handle_audit_command(logger: &AuditLogger, count: usize) -> BudgetResult<()> {
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
