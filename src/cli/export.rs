//! CLI command for data export
//!
//! Writes the ledger to a file in one of the supported formats.

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_ledger_json, export_ledger_yaml, export_transactions_csv};
use crate::storage::{KeyValueStore, Ledger};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> BudgetResult<()> {
    let state = ledger.load()?;

    let file = File::create(output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            export_transactions_csv(&state.transactions, &mut writer)?;
            println!(
                "Exported {} transactions to: {}",
                state.transactions.len(),
                output.display()
            );
        }
        ExportFormat::Json => {
            export_ledger_json(&state, &mut writer, pretty)?;
            println!("Ledger exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            export_ledger_yaml(&state, &mut writer)?;
            println!("Ledger exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::Money;
    use crate::services::TransferService;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_each_format() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        let mut ledger = Ledger::new(MemoryStore::new());
        let mut service = TransferService::new(&mut ledger, &clock);
        service
            .initialize(Money::from_cents(100000), Money::from_cents(15000))
            .unwrap();
        service.trigger_daily_transfer().unwrap();

        let temp_dir = TempDir::new().unwrap();
        for (format, name) in [
            (ExportFormat::Csv, "ledger.csv"),
            (ExportFormat::Json, "ledger.json"),
            (ExportFormat::Yaml, "ledger.yaml"),
        ] {
            let path = temp_dir.path().join(name);
            handle_export_command(&ledger, &path, format, true).unwrap();
            let contents = std::fs::read_to_string(&path).unwrap();
            assert!(contents.contains("Daily Transfer from Main"), "{}", name);
        }
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let ledger = Ledger::new(MemoryStore::new());
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.json");

        let err = handle_export_command(&ledger, &path, ExportFormat::Json, false).unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
    }
}
