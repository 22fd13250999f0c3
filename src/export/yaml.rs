//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::LedgerExport;
use crate::storage::LedgerState;

/// Export the ledger as YAML
pub fn export_ledger_yaml<W: Write>(state: &LedgerState, writer: &mut W) -> BudgetResult<()> {
    let export = LedgerExport::from_state(state);
    let err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# daybudget ledger export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_yaml_export() {
        let state = LedgerState {
            initialized: true,
            daily_limit: Money::from_cents(15000),
            ..LedgerState::default()
        };

        let mut buffer = Vec::new();
        export_ledger_yaml(&state, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# daybudget ledger export"));
        assert!(text.contains("daily_limit: 15000"));

        let parsed: LedgerExport = serde_yaml::from_str(&text).unwrap();
        assert!(parsed.initialized);
        assert!(parsed.transactions.is_empty());
    }
}
