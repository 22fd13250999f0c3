//! Storage layer for daybudget
//!
//! A flat key-value store (balances, configuration and the transaction log)
//! persisted as one JSON file with atomic writes, plus a typed [`Ledger`]
//! view over it.

pub mod file_io;
pub mod json_store;
pub mod key_value;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use json_store::JsonFileStore;
pub use key_value::{KeyValueStore, LedgerKey, MemoryStore};
pub use ledger::{Ledger, LedgerState, DEFAULT_DAILY_LIMIT};

use crate::audit::AuditLogger;
use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetError;

/// Open the on-disk ledger, attaching the audit log when enabled
pub fn open_ledger(
    paths: &BudgetPaths,
    settings: &Settings,
) -> Result<Ledger<JsonFileStore>, BudgetError> {
    paths.ensure_directories()?;

    let ledger = Ledger::new(JsonFileStore::open(paths.ledger_file())?);
    if settings.audit_enabled {
        Ok(ledger.with_audit(AuditLogger::new(paths.audit_log())))
    } else {
        Ok(ledger)
    }
}
