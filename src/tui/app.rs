//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events,
//! and runs the ledger operations the keys trigger.

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::View;
use crate::error::BudgetError;
use crate::services::{parse_amount, DayBoundaryService, SweepOutcome, TransferService};
use crate::storage::{KeyValueStore, Ledger};

use super::widgets::TextInput;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Amount entry for a spend
    Spend,
    /// Y/N confirmation before erasing everything
    ConfirmReset,
}

/// Which setup input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    MainBalance,
    DailyLimit,
}

/// Inputs of the first-run setup screen
#[derive(Debug, Clone, Default)]
pub struct SetupForm {
    pub main_balance: TextInput,
    pub daily_limit: TextInput,
    pub focus: SetupField,
}

impl SetupForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SetupField::MainBalance => SetupField::DailyLimit,
            SetupField::DailyLimit => SetupField::MainBalance,
        };
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            SetupField::MainBalance => &mut self.main_balance,
            SetupField::DailyLimit => &mut self.daily_limit,
        }
    }

    pub fn clear(&mut self) {
        self.main_balance.clear();
        self.daily_limit.clear();
        self.focus = SetupField::MainBalance;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    /// Rejected input; the user can correct it and retry
    Warning,
    Error,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    ledger: &'a mut Ledger<S>,

    pub settings: &'a Settings,

    clock: &'a dyn Clock,

    pub should_quit: bool,

    /// Rebuilt from the ledger after every operation
    pub view: View,

    pub active_dialog: ActiveDialog,

    pub setup: SetupForm,

    pub spend_input: TextInput,

    pub status: Option<StatusMessage>,

    /// Date of the last day-boundary check
    checked_on: NaiveDate,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    pub fn new(ledger: &'a mut Ledger<S>, settings: &'a Settings, clock: &'a dyn Clock) -> Self {
        let mut app = Self {
            ledger,
            settings,
            clock,
            should_quit: false,
            view: View::Setup,
            active_dialog: ActiveDialog::default(),
            setup: SetupForm::default(),
            spend_input: TextInput::new(),
            status: None,
            checked_on: clock.today(),
        };
        app.refresh();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn set_error(&mut self, error: &BudgetError) {
        let kind = if error.is_user_error() {
            StatusKind::Warning
        } else {
            StatusKind::Error
        };
        self.status = Some(StatusMessage {
            text: error.to_string(),
            kind,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::Spend {
            self.spend_input.clear();
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn is_setup(&self) -> bool {
        matches!(self.view, View::Setup)
    }

    /// Reload the ledger and rebuild the view
    pub fn refresh(&mut self) {
        match self.ledger.load() {
            Ok(state) => self.view = View::build(&state, self.settings),
            Err(e) => self.set_error(&e),
        }
        if let Some(e) = self.ledger.take_audit_failure() {
            self.status = Some(StatusMessage {
                text: format!("Saved, but the audit log was not updated: {}", e),
                kind: StatusKind::Warning,
            });
        }
    }

    /// Settle the previous day if the date changed while the app was open
    pub fn on_tick(&mut self) {
        if self.clock.today() != self.checked_on {
            self.check_day_boundary();
        }
    }

    pub fn check_day_boundary(&mut self) {
        self.checked_on = self.clock.today();
        let outcome = DayBoundaryService::new(self.ledger, self.clock).reconcile();
        match outcome {
            Ok(SweepOutcome::Swept { amount, .. }) => {
                let amount = self.settings.format_money(amount);
                self.set_status(format!("New day: moved {} to savings", amount));
            }
            Ok(SweepOutcome::Reset { .. }) => self.set_status("New day started"),
            Ok(_) => {}
            Err(e) => self.set_error(&e),
        }
        self.refresh();
    }

    /// Initialize the ledger from the setup inputs
    pub fn submit_setup(&mut self) {
        let parsed = parse_amount(self.setup.main_balance.value(), "main balance").and_then(
            |main| {
                parse_amount(self.setup.daily_limit.value(), "daily limit")
                    .map(|limit| (main, limit))
            },
        );

        let result = parsed.and_then(|(main, limit)| {
            TransferService::new(self.ledger, self.clock).initialize(main, limit)
        });

        match result {
            Ok(_) => {
                self.setup.clear();
                self.set_status("Budget initialized. Press t to fund today's allowance");
            }
            Err(e) => self.set_error(&e),
        }
        self.refresh();
    }

    /// Refill the daily account from main
    pub fn transfer(&mut self) {
        let result = TransferService::new(self.ledger, self.clock).trigger_daily_transfer();
        match result {
            Ok(result) => {
                let mut message = format!(
                    "Transferred {} to Daily",
                    self.settings.format_money(result.transferred)
                );
                if let Some(swept) = result.swept_to_savings {
                    message.push_str(&format!(
                        ", {} moved to savings",
                        self.settings.format_money(swept)
                    ));
                }
                self.set_status(message);
            }
            Err(e) => self.set_error(&e),
        }
        self.refresh();
    }

    /// Record the amount in the spend dialog
    ///
    /// The dialog stays open on error so the amount can be corrected.
    pub fn submit_spend(&mut self) {
        let result = parse_amount(self.spend_input.value(), "spending amount").and_then(|amount| {
            TransferService::new(self.ledger, self.clock).record_spending(amount)
        });

        match result {
            Ok(spent) => {
                self.close_dialog();
                self.set_status(format!(
                    "Spent {}, {} left today",
                    self.settings.format_money(spent.transaction.amount),
                    self.settings.format_money(spent.remaining)
                ));
            }
            Err(e) => self.set_error(&e),
        }
        self.refresh();
    }

    /// Erase everything after the user confirmed
    pub fn confirm_reset(&mut self) {
        self.close_dialog();
        let result = TransferService::new(self.ledger, self.clock).reset_all();
        match result {
            Ok(()) => {
                self.setup.clear();
                self.set_status("All data has been reset");
            }
            Err(e) => self.set_error(&e),
        }
        self.refresh();
    }
}
