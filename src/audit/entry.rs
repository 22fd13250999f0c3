//! Audit entry data structures
//!
//! Defines the structure of audit log entries: which ledger operation ran,
//! the balances before and after, and a readable summary of the change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Balances, Money};

/// Ledger operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Ledger seeded with starting balance and daily limit
    Initialize,
    /// Manual main -> daily transfer (with any savings sweep)
    DailyTransfer,
    /// Spending recorded against the daily account
    Spending,
    /// Automatic end-of-day settlement
    DaySweep,
    /// Daily limit changed
    LimitChange,
    /// Entire store erased
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Initialize => write!(f, "INITIALIZE"),
            Operation::DailyTransfer => write!(f, "DAILY_TRANSFER"),
            Operation::Spending => write!(f, "SPENDING"),
            Operation::DaySweep => write!(f, "DAY_SWEEP"),
            Operation::LimitChange => write!(f, "LIMIT_CHANGE"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Amount the operation moved or set, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Balances>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Balances>,

    /// Human-readable summary of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    pub fn new(operation: Operation) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            amount: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Record both balance snapshots and summarize the difference
    pub fn with_balances(mut self, before: Balances, after: Balances) -> Self {
        self.diff_summary = before.describe_changes(&after);
        self.before = Some(before);
        self.after = Some(after);
        self
    }

    /// Override the summary (for operations that don't move balances)
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.diff_summary = Some(summary.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(amount) = self.amount {
            output.push_str(&format!(" {}", amount));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
