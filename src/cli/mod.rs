//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod export;
pub mod ledger;
pub mod status;

pub use config::handle_config_command;
pub use export::{handle_export_command, ExportFormat};
pub use ledger::{
    handle_init_command, handle_limit_command, handle_reset_command, handle_spend_command,
    handle_transfer_command, report_audit_failure, run_day_boundary,
};
pub use status::{handle_audit_command, handle_history_command, handle_status_command};
