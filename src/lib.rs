//! daybudget - a daily allowance budget for the terminal
//!
//! Money lives in three accounts: a main pool, a daily allowance that is
//! refilled from main on demand, and savings. Whatever is left of the
//! allowance when the calendar date changes is swept into savings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, accounts and transaction records
//! - `storage`: Key-value ledger store persisted as JSON
//! - `services`: Transfer engine and day-boundary monitor
//! - `audit`: Audit logging system
//! - `display`: Text formatting of the dashboard and history
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use daybudget::clock::SystemClock;
//! use daybudget::config::{BudgetPaths, Settings};
//! use daybudget::services::TransferService;
//! use daybudget::storage::open_ledger;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut ledger = open_ledger(&paths, &settings)?;
//! TransferService::new(&mut ledger, &SystemClock).trigger_daily_transfer()?;
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
