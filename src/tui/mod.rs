//! Terminal User Interface module
//!
//! An interactive dashboard for daybudget using ratatui: a setup screen on
//! first run, then balances, today's allowance and recent transactions.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
