use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use daybudget::audit::AuditLogger;
use daybudget::cli::{
    handle_audit_command, handle_config_command, handle_export_command, handle_history_command,
    handle_init_command, handle_limit_command, handle_reset_command, handle_spend_command,
    handle_status_command, handle_transfer_command, report_audit_failure, run_day_boundary,
    ExportFormat,
};
use daybudget::clock::SystemClock;
use daybudget::config::{BudgetPaths, Settings};
use daybudget::storage::open_ledger;

#[derive(Parser)]
#[command(
    name = "daybudget",
    version,
    about = "Daily allowance budgeting in the terminal",
    long_about = "daybudget splits your money into a main pool, a daily allowance and \
                  savings. Fund today's allowance from main, record what you spend, and \
                  whatever is left at the end of the day is swept into savings."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Set up the budget with a starting main balance and daily limit
    Init {
        /// Starting main account balance (e.g. 1000 or 1000.50)
        main_balance: String,
        /// Amount moved into the daily account by each transfer
        daily_limit: String,
    },

    /// Refill the daily account from main
    Transfer,

    /// Record spending from the daily account
    Spend {
        /// Amount spent
        amount: String,
    },

    /// Change the daily limit
    Limit {
        /// New daily limit
        amount: String,
    },

    /// Erase all balances and history
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show balances, today's allowance and recent transactions
    Status,

    /// Show the transaction history
    #[command(alias = "log")]
    History {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Set the currency symbol shown before amounts
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut ledger = open_ledger(&paths, &settings)?;
    let clock = SystemClock;

    // Reset erases everything and config never reads the ledger
    if !matches!(
        cli.command,
        Some(Commands::Reset { .. }) | Some(Commands::Config { .. })
    ) {
        run_day_boundary(&mut ledger, &clock, &settings)?;
    }

    match cli.command {
        Some(Commands::Tui) => daybudget::tui::run_tui(&mut ledger, &settings, &clock)?,
        None if std::io::stdout().is_terminal() => {
            daybudget::tui::run_tui(&mut ledger, &settings, &clock)?
        }
        None | Some(Commands::Status) => handle_status_command(&ledger, &settings)?,
        Some(Commands::Init {
            main_balance,
            daily_limit,
        }) => handle_init_command(&mut ledger, &clock, &settings, &main_balance, &daily_limit)?,
        Some(Commands::Transfer) => handle_transfer_command(&mut ledger, &clock, &settings)?,
        Some(Commands::Spend { amount }) => {
            handle_spend_command(&mut ledger, &clock, &settings, &amount)?
        }
        Some(Commands::Limit { amount }) => {
            handle_limit_command(&mut ledger, &clock, &settings, &amount)?
        }
        Some(Commands::Reset { yes }) => handle_reset_command(&mut ledger, &clock, yes)?,
        Some(Commands::History { limit }) => handle_history_command(&ledger, &settings, limit)?,
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => handle_export_command(&ledger, &output, format, pretty)?,
        Some(Commands::Audit { count }) => {
            handle_audit_command(&AuditLogger::new(paths.audit_log()), count)?
        }
        Some(Commands::Config { currency }) => {
            handle_config_command(&paths, &mut settings, currency)?
        }
    }

    report_audit_failure(&mut ledger);
    Ok(())
}
