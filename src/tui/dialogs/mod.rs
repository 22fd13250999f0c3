//! Dialog implementations for the TUI

pub mod confirm;
pub mod spend;
