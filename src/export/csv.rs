//! CSV Export functionality
//!
//! Exports the transaction log, newest first, in a spreadsheet-friendly form.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::TransactionLog;

const HEADER: [&str; 7] = [
    "ID",
    "Timestamp",
    "Description",
    "Account",
    "Type",
    "Amount",
    "Signed Amount",
];

/// Export the transaction log to CSV
pub fn export_transactions_csv<W: Write>(log: &TransactionLog, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let err = |e: csv::Error| BudgetError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(err)?;

    for txn in log.iter() {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                txn.description.clone(),
                txn.account.to_string(),
                txn.kind.to_string(),
                txn.amount.to_string(),
                txn.signed_amount().to_string(),
            ])
            .map_err(err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
