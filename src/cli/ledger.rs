//! CLI command handlers for ledger operations
//!
//! Parses amounts from the command line, calls the transfer engine and
//! prints the outcome.

use std::io::{BufRead, Write};

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::BudgetResult;
use crate::services::{parse_amount, DayBoundaryService, SweepOutcome, TransferService};
use crate::storage::{KeyValueStore, Ledger};

/// Handle the init command
pub fn handle_init_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    clock: &dyn Clock,
    settings: &Settings,
    main_balance: &str,
    daily_limit: &str,
) -> BudgetResult<()> {
    let main_balance = parse_amount(main_balance, "main balance")?;
    let daily_limit = parse_amount(daily_limit, "daily limit")?;

    let balances = TransferService::new(ledger, clock).initialize(main_balance, daily_limit)?;

    println!("Budget initialized.");
    println!("  Main Account: {}", settings.format_money(balances.main));
    println!("  Daily limit:  {}", settings.format_money(daily_limit));
    println!();
    println!("Run 'daybudget transfer' to fund today's allowance.");

    Ok(())
}

/// Handle the transfer command
pub fn handle_transfer_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    clock: &dyn Clock,
    settings: &Settings,
) -> BudgetResult<()> {
    let result = TransferService::new(ledger, clock).trigger_daily_transfer()?;

    if let Some(swept) = result.swept_to_savings {
        println!(
            "Moved {} of unspent allowance to savings.",
            settings.format_money(swept)
        );
    }
    println!(
        "Transferred {} from Main to Daily.",
        settings.format_money(result.transferred)
    );
    println!(
        "  Main: {}  Daily: {}  Savings: {}",
        settings.format_money(result.balances.main),
        settings.format_money(result.balances.daily),
        settings.format_money(result.balances.savings)
    );

    Ok(())
}

/// Handle the spend command
pub fn handle_spend_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    clock: &dyn Clock,
    settings: &Settings,
    amount: &str,
) -> BudgetResult<()> {
    let amount = parse_amount(amount, "spending amount")?;
    let result = TransferService::new(ledger, clock).record_spending(amount)?;

    println!(
        "Spent {}. {} left for today.",
        settings.format_money(result.transaction.amount),
        settings.format_money(result.remaining)
    );

    Ok(())
}

/// Handle the limit command
pub fn handle_limit_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    clock: &dyn Clock,
    settings: &Settings,
    amount: &str,
) -> BudgetResult<()> {
    let limit = parse_amount(amount, "daily limit")?;
    let previous = TransferService::new(ledger, clock).set_daily_limit(limit)?;

    if previous == limit {
        println!("Daily limit is already {}.", settings.format_money(limit));
    } else {
        println!(
            "Daily limit changed: {} -> {}",
            settings.format_money(previous),
            settings.format_money(limit)
        );
        println!("The new limit applies from the next transfer.");
    }

    Ok(())
}

/// Handle the reset command
///
/// Without `yes`, asks for a typed confirmation on stdin.
pub fn handle_reset_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    clock: &dyn Clock,
    yes: bool,
) -> BudgetResult<()> {
    if !yes {
        print!("This erases all balances and history. Type 'yes' to continue: ");
        std::io::stdout().flush()?;

        let stdin = std::io::stdin();
        if !read_confirmation(stdin.lock())? {
            println!("Aborted.");
            return Ok(());
        }
    }

    TransferService::new(ledger, clock).reset_all()?;
    println!("All data has been reset.");

    Ok(())
}

/// Read one line and accept only "yes"
fn read_confirmation<R: BufRead>(mut reader: R) -> BudgetResult<bool> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Run the day-boundary monitor and report any settlement
pub fn run_day_boundary<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    clock: &dyn Clock,
    settings: &Settings,
) -> BudgetResult<SweepOutcome> {
    let outcome = DayBoundaryService::new(ledger, clock).reconcile()?;

    if let SweepOutcome::Swept { amount, .. } = outcome {
        println!(
            "New day: moved {} of yesterday's allowance to savings.",
            settings.format_money(amount)
        );
        println!();
    }

    Ok(outcome)
}

/// Warn on stderr when an audit entry could not be written
///
/// The ledger change itself has already been saved.
pub fn report_audit_failure<S: KeyValueStore>(ledger: &mut Ledger<S>) {
    if let Some(e) = ledger.take_audit_failure() {
        eprintln!("Warning: audit log not updated: {}", e);
    }
}
