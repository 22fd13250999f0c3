//! Export module for daybudget
//!
//! - CSV: the transaction log (spreadsheet-compatible)
//! - JSON: the full ledger, machine-readable
//! - YAML: the full ledger, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_ledger_yaml;
