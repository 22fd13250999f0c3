//! Key-value store contract
//!
//! The ledger is a flat map of a fixed set of keys to JSON values. A `set`
//! is durable once it returns; there are no guarantees across separate
//! `set` calls, so writes that must land together go through `set_many`.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::BudgetResult;

/// Every key the ledger persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LedgerKey {
    Initialized,
    MainAccount,
    DailyAccount,
    SavingsAccount,
    DailyLimit,
    LastTransferDate,
    Transactions,
}

impl LedgerKey {
    pub fn all() -> &'static [LedgerKey] {
        &[
            LedgerKey::Initialized,
            LedgerKey::MainAccount,
            LedgerKey::DailyAccount,
            LedgerKey::SavingsAccount,
            LedgerKey::DailyLimit,
            LedgerKey::LastTransferDate,
            LedgerKey::Transactions,
        ]
    }

    /// Name of the key on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerKey::Initialized => "initialized",
            LedgerKey::MainAccount => "mainAccount",
            LedgerKey::DailyAccount => "dailyAccount",
            LedgerKey::SavingsAccount => "savingsAccount",
            LedgerKey::DailyLimit => "dailyLimit",
            LedgerKey::LastTransferDate => "lastTransferDate",
            LedgerKey::Transactions => "transactions",
        }
    }
}

impl fmt::Display for LedgerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persistent key-value map
pub trait KeyValueStore {
    /// Current value of `key`, if one has been set
    fn get(&self, key: LedgerKey) -> Option<Value>;

    /// Set one key
    fn set(&mut self, key: LedgerKey, value: Value) -> BudgetResult<()>;

    /// Set several keys in one step
    ///
    /// The default writes them one at a time; stores that can do better
    /// should apply all entries or none.
    fn set_many(&mut self, entries: Vec<(LedgerKey, Value)>) -> BudgetResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Irreversibly erase every key
    fn clear(&mut self) -> BudgetResult<()>;
}

/// Volatile store, used by tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<LedgerKey, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: LedgerKey) -> Option<Value> {
        self.entries.get(&key).cloned()
    }

    fn set(&mut self, key: LedgerKey, value: Value) -> BudgetResult<()> {
        self.entries.insert(key, value);
        Ok(())
    }

    fn clear(&mut self) -> BudgetResult<()> {
        self.entries.clear();
        Ok(())
    }
}
