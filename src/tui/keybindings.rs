//! Keybinding definitions
//!
//! The keys each screen responds to, used for the status bar hints.

use crossterm::event::KeyCode;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub description: &'static str,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Setup,
    Dashboard,
    SpendDialog,
    ConfirmDialog,
}

pub static KEYBINDINGS: &[Keybinding] = &[
    // Setup
    Keybinding {
        key: KeyCode::Tab,
        description: "Next field",
        context: KeyContext::Setup,
    },
    Keybinding {
        key: KeyCode::Enter,
        description: "Start",
        context: KeyContext::Setup,
    },
    Keybinding {
        key: KeyCode::Esc,
        description: "Quit",
        context: KeyContext::Setup,
    },
    // Dashboard
    Keybinding {
        key: KeyCode::Char('t'),
        description: "Transfer",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('s'),
        description: "Spend",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('r'),
        description: "Reset",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        description: "Quit",
        context: KeyContext::Dashboard,
    },
    // Spend dialog
    Keybinding {
        key: KeyCode::Enter,
        description: "Record",
        context: KeyContext::SpendDialog,
    },
    Keybinding {
        key: KeyCode::Esc,
        description: "Cancel",
        context: KeyContext::SpendDialog,
    },
    // Reset confirmation
    Keybinding {
        key: KeyCode::Char('y'),
        description: "Erase all",
        context: KeyContext::ConfirmDialog,
    },
    Keybinding {
        key: KeyCode::Char('n'),
        description: "Keep",
        context: KeyContext::ConfirmDialog,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a key for display
pub fn format_key(key: KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        _ => format!("{:?}", key),
    }
}

/// One-line hint text: `t:Transfer  s:Spend  ...`
pub fn hint_line(context: KeyContext) -> String {
    get_keybindings(context)
        .iter()
        .map(|kb| format!("{}:{}", format_key(kb.key), kb.description))
        .collect::<Vec<_>>()
        .join("  ")
}
