//! The three named accounts and their balances

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// One of the three accounts the ledger tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Funds not yet allocated to daily spending
    Main,
    /// Today's spending allowance
    Daily,
    /// Accumulated unspent daily funds
    Savings,
}

impl AccountKind {
    pub fn all() -> &'static [AccountKind] {
        &[AccountKind::Main, AccountKind::Daily, AccountKind::Savings]
    }

    /// Title used in the dashboard panels
    pub fn title(&self) -> &'static str {
        match self {
            AccountKind::Main => "Main Account",
            AccountKind::Daily => "Daily Account",
            AccountKind::Savings => "Savings Account",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Main => write!(f, "main"),
            AccountKind::Daily => write!(f, "daily"),
            AccountKind::Savings => write!(f, "savings"),
        }
    }
}

/// Snapshot of all three balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balances {
    pub main: Money,
    pub daily: Money,
    pub savings: Money,
}

impl Balances {
    pub fn get(&self, account: AccountKind) -> Money {
        match account {
            AccountKind::Main => self.main,
            AccountKind::Daily => self.daily,
            AccountKind::Savings => self.savings,
        }
    }

    /// Sum of all three accounts
    pub fn total(&self) -> Money {
        self.main + self.daily + self.savings
    }

    /// Human-readable list of the balances that differ from `other`
    ///
    /// Returns `None` when nothing changed.
    pub fn describe_changes(&self, after: &Balances) -> Option<String> {
        let changes: Vec<String> = AccountKind::all()
            .iter()
            .filter(|kind| self.get(**kind) != after.get(**kind))
            .map(|kind| format!("{}: {} -> {}", kind, self.get(*kind), after.get(*kind)))
            .collect();

        if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        }
    }
}
