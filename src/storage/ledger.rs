//! Typed view over the ledger key-value store
//!
//! `Ledger` owns the store and decodes each key into its domain type,
//! substituting the key's default when it is absent. Values that are present
//! but undecodable are reported as storage errors.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Balances, Money, TransactionLog};

use super::key_value::{KeyValueStore, LedgerKey};

/// Daily limit assumed when none has been stored
pub const DEFAULT_DAILY_LIMIT: Money = Money::from_cents(15000);

/// Everything the ledger persists, decoded
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerState {
    pub initialized: bool,
    pub balances: Balances,
    pub daily_limit: Money,
    pub last_transfer_date: Option<NaiveDate>,
    pub transactions: TransactionLog,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            initialized: false,
            balances: Balances::default(),
            daily_limit: DEFAULT_DAILY_LIMIT,
            last_transfer_date: None,
            transactions: TransactionLog::new(),
        }
    }
}

pub struct Ledger<S: KeyValueStore> {
    store: S,
    audit: Option<AuditLogger>,
    /// First audit append that failed since the last `take_audit_failure`
    audit_failure: Option<BudgetError>,
}

impl<S: KeyValueStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            audit: None,
            audit_failure: None,
        }
    }

    /// Append every operation to the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, key: LedgerKey) -> BudgetResult<Option<T>> {
        match self.store.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                BudgetError::Storage(format!("Corrupt value for '{}': {}", key, e))
            }),
        }
    }

    pub fn is_initialized(&self) -> BudgetResult<bool> {
        match self.store.get(LedgerKey::Initialized) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(flag)) => Ok(flag),
            // Older stores kept the flag as the string "true"
            Some(Value::String(s)) => Ok(s == "true"),
            Some(other) => Err(BudgetError::Storage(format!(
                "Corrupt value for '{}': {}",
                LedgerKey::Initialized,
                other
            ))),
        }
    }

    pub fn balances(&self) -> BudgetResult<Balances> {
        Ok(Balances {
            main: self.read(LedgerKey::MainAccount)?.unwrap_or_default(),
            daily: self.read(LedgerKey::DailyAccount)?.unwrap_or_default(),
            savings: self.read(LedgerKey::SavingsAccount)?.unwrap_or_default(),
        })
    }

    pub fn daily_limit(&self) -> BudgetResult<Money> {
        Ok(self
            .read(LedgerKey::DailyLimit)?
            .unwrap_or(DEFAULT_DAILY_LIMIT))
    }

    pub fn last_transfer_date(&self) -> BudgetResult<Option<NaiveDate>> {
        self.read(LedgerKey::LastTransferDate)
    }

    pub fn transactions(&self) -> BudgetResult<TransactionLog> {
        Ok(self
            .read::<TransactionLog>(LedgerKey::Transactions)?
            .unwrap_or_default())
    }

    /// Decode every key
    pub fn load(&self) -> BudgetResult<LedgerState> {
        Ok(LedgerState {
            initialized: self.is_initialized()?,
            balances: self.balances()?,
            daily_limit: self.daily_limit()?,
            last_transfer_date: self.last_transfer_date()?,
            transactions: self.transactions()?,
        })
    }

    /// Write every key of `state` in a single store update
    pub fn save(&mut self, state: &LedgerState) -> BudgetResult<()> {
        let date = match state.last_transfer_date {
            Some(date) => serde_json::to_value(date)?,
            None => Value::Null,
        };

        self.store.set_many(vec![
            (LedgerKey::Initialized, Value::Bool(state.initialized)),
            (LedgerKey::MainAccount, serde_json::to_value(state.balances.main)?),
            (LedgerKey::DailyAccount, serde_json::to_value(state.balances.daily)?),
            (LedgerKey::SavingsAccount, serde_json::to_value(state.balances.savings)?),
            (LedgerKey::DailyLimit, serde_json::to_value(state.daily_limit)?),
            (LedgerKey::LastTransferDate, date),
            (LedgerKey::Transactions, serde_json::to_value(&state.transactions)?),
        ])
    }

    /// Erase the whole store
    pub fn clear(&mut self) -> BudgetResult<()> {
        self.store.clear()
    }

    /// Append an entry to the audit log, if one is attached
    ///
    /// Called after the ledger write has landed, so a failed append does not
    /// fail the operation. It is kept for `take_audit_failure` instead.
    pub fn record(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                self.audit_failure.get_or_insert(e);
            }
        }
    }

    /// Take the pending audit failure, if any
    pub fn take_audit_failure(&mut self) -> Option<BudgetError> {
        self.audit_failure.take()
    }
}
