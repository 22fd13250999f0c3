//! JSON Export functionality
//!
//! Exports the complete ledger (balances, configuration and history) with
//! schema versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Balances, Money, Transaction};
use crate::storage::LedgerState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub initialized: bool,

    pub balances: Balances,

    pub daily_limit: Money,

    pub last_transfer_date: Option<NaiveDate>,

    /// Newest first
    pub transactions: Vec<Transaction>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    /// Sum of all three balances
    pub total_funds: Money,

    pub earliest_transaction: Option<String>,

    pub latest_transaction: Option<String>,
}

impl LedgerExport {
    pub fn from_state(state: &LedgerState) -> Self {
        let transactions: Vec<Transaction> = state.transactions.iter().cloned().collect();
        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            total_funds: state.balances.total(),
            earliest_transaction: transactions.last().map(|t| t.timestamp.to_string()),
            latest_transaction: transactions.first().map(|t| t.timestamp.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            initialized: state.initialized,
            balances: state.balances,
            daily_limit: state.daily_limit,
            last_transfer_date: state.last_transfer_date,
            transactions,
            metadata,
        }
    }
}

/// Export the ledger as JSON
pub fn export_ledger_json<W: Write>(
    state: &LedgerState,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = LedgerExport::from_state(state);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
