//! CLI command handler for configuration
//!
//! Shows paths and settings, and updates the currency symbol.

use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};

/// Handle the config command
pub fn handle_config_command(
    paths: &BudgetPaths,
    settings: &mut Settings,
    currency: Option<String>,
) -> BudgetResult<()> {
    if let Some(symbol) = currency {
        let symbol = symbol.trim().to_string();
        if symbol.is_empty() {
            return Err(BudgetError::Config(
                "Currency symbol cannot be empty".to_string(),
            ));
        }
        settings.currency_symbol = symbol;
        settings.save(paths)?;
        println!("Currency symbol set to '{}'.", settings.currency_symbol);
        println!();
    }

    println!("daybudget Configuration");
    println!("=======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", paths.ledger_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Timestamp format:    {}", settings.timestamp_format);
    println!("  Recent transactions: {}", settings.recent_transactions);
    println!("  Audit enabled:       {}", settings.audit_enabled);

    Ok(())
}
