//! Service layer for daybudget
//!
//! Domain operations over the [`Ledger`](crate::storage::Ledger): the
//! transfer engine and the day-boundary monitor. Services take typed
//! arguments and return `BudgetResult`; nothing here talks to a terminal.

pub mod day_boundary;
pub mod transfer;

pub use day_boundary::{DayBoundaryService, SweepOutcome};
pub use transfer::{SpendingResult, TransferResult, TransferService};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// Parse user input as a strictly positive amount
///
/// `field` names the input in the error message ("daily limit", "spending
/// amount").
pub fn parse_amount(input: &str, field: &str) -> BudgetResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| BudgetError::InvalidAmount(format!("{}: {}", field, e)))?;
    require_positive(amount, field)?;
    Ok(amount)
}

pub(crate) fn require_positive(amount: Money, field: &str) -> BudgetResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(BudgetError::InvalidAmount(format!(
            "{} must be greater than zero, got {}",
            field, amount
        )))
    }
}
