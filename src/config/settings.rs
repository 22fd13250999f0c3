//! User settings for daybudget
//!
//! Display preferences and audit logging. Settings live outside the ledger
//! store, so a full reset of the ledger keeps them.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::Money;

/// User settings for daybudget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to every displayed amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for transaction timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// How many transactions the dashboard shows
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    /// Whether engine operations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

fn default_recent_transactions() -> usize {
    10
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            timestamp_format: default_timestamp_format(),
            recent_transactions: default_recent_transactions(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject a timestamp format with unknown specifiers
    pub fn validate(&self) -> Result<(), BudgetError> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(BudgetError::Config(format!(
                "Invalid timestamp format '{}'",
                self.timestamp_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a transaction timestamp with the configured format
    ///
    /// Specifiers a local time cannot supply (such as `%Z`) fall back to the
    /// default format.
    pub fn format_timestamp(&self, timestamp: NaiveDateTime) -> String {
        let mut out = String::new();
        if write!(out, "{}", timestamp.format(&self.timestamp_format)).is_err() {
            out.clear();
            out.push_str(&timestamp.format(DEFAULT_TIMESTAMP_FORMAT).to_string());
        }
        out
    }
}
