//! Transaction model
//!
//! A transaction record is the immutable audit entry written for every
//! balance movement. The ledger keeps the most recent records, newest first.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::AccountKind;
use super::ids::TransactionId;
use super::money::Money;

/// Maximum number of records kept in the log
pub const HISTORY_LIMIT: usize = 50;

/// Direction of a movement relative to the affected account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "credit"),
            Self::Debit => write!(f, "debit"),
        }
    }
}

/// A single balance movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub description: String,

    /// Always positive; the direction comes from `kind`
    pub amount: Money,

    #[serde(alias = "type")]
    pub kind: TransactionKind,

    pub account: AccountKind,

    /// Local wall-clock time the record was created
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    /// Create a credit record
    pub fn credit(
        id: TransactionId,
        description: impl Into<String>,
        amount: Money,
        account: AccountKind,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind: TransactionKind::Credit,
            account,
            timestamp,
        }
    }

    /// Create a debit record
    pub fn debit(
        id: TransactionId,
        description: impl Into<String>,
        amount: Money,
        account: AccountKind,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind: TransactionKind::Debit,
            account,
            timestamp,
        }
    }

    /// Amount with the sign applied: negative for debits
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }
}

/// Bounded, newest-first list of transaction records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionLog(Vec<Transaction>);

impl TransactionLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Prepend a record, dropping the oldest ones beyond [`HISTORY_LIMIT`]
    pub fn push(&mut self, txn: Transaction) {
        self.0.insert(0, txn);
        self.0.truncate(HISTORY_LIMIT);
    }

    /// The newest record, if any
    pub fn newest(&self) -> Option<&Transaction> {
        self.0.first()
    }

    /// Id for the next record created at `now`
    pub fn next_id(&self, now: NaiveDateTime) -> TransactionId {
        TransactionId::next(now, self.newest().map(|t| t.id))
    }

    /// The `count` most recent records, newest first
    pub fn recent(&self, count: usize) -> &[Transaction] {
        &self.0[..count.min(self.0.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.0
    }
}

impl From<Vec<Transaction>> for TransactionLog {
    /// Builds a log from records already ordered newest first
    fn from(mut records: Vec<Transaction>) -> Self {
        records.truncate(HISTORY_LIMIT);
        Self(records)
    }
}
