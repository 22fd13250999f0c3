//! Core data models for daybudget
//!
//! The three accounts, money amounts, and the transaction records written for
//! every balance movement.

pub mod account;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{AccountKind, Balances};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionLog, HISTORY_LIMIT};
