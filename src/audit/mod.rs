//! Audit logging system for daybudget
//!
//! Every ledger operation (initialize, transfer, spending, day sweep, limit
//! change, reset) is appended to `audit.log` as one JSON line, with the
//! balances before and after. The log lives next to the ledger store, not
//! inside it, so it survives a full reset.
//!
//! # Example
//!
//! ```rust,ignore
//! use daybudget::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::new(Operation::Spending)
//!     .with_amount(amount)
//!     .with_balances(before, after);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
