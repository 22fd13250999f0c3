//! Transfer engine
//!
//! Moves funds between the main, daily and savings accounts. Every balance
//! movement appends one transaction record, except the initial seeding.
//! Each operation validates first, then writes all affected keys in one
//! store update, so a rejected operation leaves the ledger untouched.

use crate::audit::{AuditEntry, Operation};
use crate::clock::Clock;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{AccountKind, Balances, Money, Transaction, TransactionLog};
use crate::storage::{KeyValueStore, Ledger, LedgerState};

use super::day_boundary::sweep_to_savings;
use super::require_positive;

pub const SAVINGS_SWEEP_DESCRIPTION: &str = "Transfer to Savings";
pub const DAILY_TRANSFER_DESCRIPTION: &str = "Daily Transfer from Main";
pub const SPENDING_DESCRIPTION: &str = "Spending";

/// Service for moving funds between the three accounts
pub struct TransferService<'a, S: KeyValueStore> {
    ledger: &'a mut Ledger<S>,
    clock: &'a dyn Clock,
}

/// Result of a manual daily transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferResult {
    /// Leftover daily balance moved to savings before the refill
    pub swept_to_savings: Option<Money>,
    /// Amount moved from main to daily
    pub transferred: Money,
    pub balances: Balances,
}

/// Result of recording a spend
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingResult {
    pub transaction: Transaction,
    /// Daily balance after the spend
    pub remaining: Money,
}

impl<'a, S: KeyValueStore> TransferService<'a, S> {
    pub fn new(ledger: &'a mut Ledger<S>, clock: &'a dyn Clock) -> Self {
        Self { ledger, clock }
    }

    fn load_initialized(&self) -> BudgetResult<LedgerState> {
        let state = self.ledger.load()?;
        if !state.initialized {
            return Err(BudgetError::NotInitialized);
        }
        Ok(state)
    }

    /// Set up the ledger with a starting main balance and daily limit
    ///
    /// Overwrites any existing ledger: balances, limit and history start
    /// fresh. The seeding itself is not a transaction record.
    pub fn initialize(&mut self, main_balance: Money, daily_limit: Money) -> BudgetResult<Balances> {
        require_positive(main_balance, "main balance")?;
        require_positive(daily_limit, "daily limit")?;

        // A corrupt store can still be re-initialized
        let before = self.ledger.balances().unwrap_or_default();
        let state = LedgerState {
            initialized: true,
            balances: Balances {
                main: main_balance,
                daily: Money::zero(),
                savings: Money::zero(),
            },
            daily_limit,
            last_transfer_date: Some(self.clock.today()),
            transactions: TransactionLog::new(),
        };

        self.ledger.save(&state)?;
        self.ledger.record(
            AuditEntry::new(Operation::Initialize)
                .with_amount(main_balance)
                .with_balances(before, state.balances),
        );

        Ok(state.balances)
    }

    /// Refill the daily account from main
    ///
    /// Any unspent daily balance is first moved to savings. Fails without
    /// changing anything when main holds less than the daily limit.
    pub fn trigger_daily_transfer(&mut self) -> BudgetResult<TransferResult> {
        let mut state = self.load_initialized()?;
        let limit = state.daily_limit;

        if state.balances.main < limit {
            return Err(BudgetError::insufficient(
                AccountKind::Main,
                limit,
                state.balances.main,
            ));
        }

        let before = state.balances;
        let now = self.clock.now();
        let today = now.date();

        let swept = sweep_to_savings(&mut state, SAVINGS_SWEEP_DESCRIPTION, now);

        state.balances.main -= limit;
        state.balances.daily = limit;
        state.last_transfer_date = Some(match state.last_transfer_date {
            Some(last) if last > today => last,
            _ => today,
        });

        let id = state.transactions.next_id(now);
        state.transactions.push(Transaction::credit(
            id,
            DAILY_TRANSFER_DESCRIPTION,
            limit,
            AccountKind::Daily,
            now,
        ));

        self.ledger.save(&state)?;
        self.ledger.record(
            AuditEntry::new(Operation::DailyTransfer)
                .with_amount(limit)
                .with_balances(before, state.balances),
        );

        Ok(TransferResult {
            swept_to_savings: swept,
            transferred: limit,
            balances: state.balances,
        })
    }

    /// Spend from the daily account
    pub fn record_spending(&mut self, amount: Money) -> BudgetResult<SpendingResult> {
        require_positive(amount, "spending amount")?;
        let mut state = self.load_initialized()?;

        if amount > state.balances.daily {
            return Err(BudgetError::insufficient(
                AccountKind::Daily,
                amount,
                state.balances.daily,
            ));
        }

        let before = state.balances;
        let now = self.clock.now();

        state.balances.daily -= amount;
        let transaction = Transaction::debit(
            state.transactions.next_id(now),
            SPENDING_DESCRIPTION,
            amount,
            AccountKind::Daily,
            now,
        );
        state.transactions.push(transaction.clone());

        self.ledger.save(&state)?;
        self.ledger.record(
            AuditEntry::new(Operation::Spending)
                .with_amount(amount)
                .with_balances(before, state.balances),
        );

        Ok(SpendingResult {
            transaction,
            remaining: state.balances.daily,
        })
    }

    /// Change the amount future transfers move into the daily account
    ///
    /// Returns the previous limit. Balances are not touched, so the daily
    /// account may temporarily hold more than the new limit.
    pub fn set_daily_limit(&mut self, limit: Money) -> BudgetResult<Money> {
        require_positive(limit, "daily limit")?;
        let mut state = self.load_initialized()?;

        let previous = state.daily_limit;
        if previous == limit {
            return Ok(previous);
        }

        state.daily_limit = limit;
        self.ledger.save(&state)?;
        self.ledger.record(
            AuditEntry::new(Operation::LimitChange)
                .with_amount(limit)
                .with_summary(format!("daily limit: {} -> {}", previous, limit)),
        );

        Ok(previous)
    }

    /// Erase the entire ledger, returning it to the uninitialized state
    ///
    /// Irreversible. Callers are responsible for confirming with the user.
    pub fn reset_all(&mut self) -> BudgetResult<()> {
        let before = self.ledger.balances().unwrap_or_default();
        self.ledger.clear()?;
        self.ledger.record(
            AuditEntry::new(Operation::Reset).with_balances(before, Balances::default()),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::clock::FixedClock;
    use crate::models::{TransactionKind, HISTORY_LIMIT};
    use crate::services::{DayBoundaryService, SweepOutcome};
    use crate::storage::{JsonFileStore, LedgerKey, MemoryStore};
    use chrono::{Duration, NaiveDate};
    use tempfile::TempDir;

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    fn clock() -> FixedClock {
        FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
    }

    fn initialized(main: i64, limit: i64, clock: &FixedClock) -> Ledger<MemoryStore> {
        let mut ledger = Ledger::new(MemoryStore::new());
        TransferService::new(&mut ledger, clock)
            .initialize(cents(main), cents(limit))
            .unwrap();
        ledger
    }

    #[test]
    fn test_initialize_seeds_balances() {
        let clock = clock();
        let ledger = initialized(100000, 15000, &clock);
        let state = ledger.load().unwrap();

        assert!(state.initialized);
        assert_eq!(state.balances.main, cents(100000));
        assert_eq!(state.balances.daily, Money::zero());
        assert_eq!(state.balances.savings, Money::zero());
        assert_eq!(state.daily_limit, cents(15000));
        assert_eq!(state.last_transfer_date, Some(clock.today()));
        assert!(state.transactions.is_empty());
    }

    #[test]
    fn test_initialize_rejects_non_positive() {
        let clock = clock();
        let mut ledger = Ledger::new(MemoryStore::new());
        let mut service = TransferService::new(&mut ledger, &clock);

        assert!(service.initialize(Money::zero(), cents(15000)).unwrap_err().is_invalid_amount());
        assert!(service.initialize(cents(100000), cents(-100)).unwrap_err().is_invalid_amount());
        assert!(ledger.store().is_empty());
    }

    #[test]
    fn test_reinitialize_clears_history() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);
        let mut service = TransferService::new(&mut ledger, &clock);
        service.trigger_daily_transfer().unwrap();
        service.initialize(cents(50000), cents(10000)).unwrap();

        let state = ledger.load().unwrap();
        assert_eq!(state.balances.main, cents(50000));
        assert!(state.transactions.is_empty());
    }

    #[test]
    fn test_operations_require_initialization() {
        let clock = clock();
        let mut ledger = Ledger::new(MemoryStore::new());
        let mut service = TransferService::new(&mut ledger, &clock);

        assert!(matches!(
            service.trigger_daily_transfer(),
            Err(BudgetError::NotInitialized)
        ));
        assert!(matches!(
            service.record_spending(cents(100)),
            Err(BudgetError::NotInitialized)
        ));
        assert!(matches!(
            service.set_daily_limit(cents(100)),
            Err(BudgetError::NotInitialized)
        ));
    }

    #[test]
    fn test_first_transfer_moves_limit() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);

        let result = TransferService::new(&mut ledger, &clock)
            .trigger_daily_transfer()
            .unwrap();

        assert_eq!(result.swept_to_savings, None);
        assert_eq!(result.transferred, cents(15000));
        assert_eq!(result.balances.main, cents(85000));
        assert_eq!(result.balances.daily, cents(15000));

        let log = ledger.transactions().unwrap();
        assert_eq!(log.len(), 1);
        let txn = log.newest().unwrap();
        assert_eq!(txn.description, DAILY_TRANSFER_DESCRIPTION);
        assert_eq!(txn.kind, TransactionKind::Credit);
        assert_eq!(txn.account, AccountKind::Daily);
        assert_eq!(txn.amount, cents(15000));
    }

    #[test]
    fn test_transfer_sweeps_leftover_first() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);
        let mut service = TransferService::new(&mut ledger, &clock);
        service.trigger_daily_transfer().unwrap();
        service.record_spending(cents(4000)).unwrap();

        let result = service.trigger_daily_transfer().unwrap();

        assert_eq!(result.swept_to_savings, Some(cents(11000)));
        assert_eq!(
            result.balances,
            Balances {
                main: cents(70000),
                daily: cents(15000),
                savings: cents(11000),
            }
        );

        let log = ledger.transactions().unwrap();
        // transfer, spend, sweep, transfer
        assert_eq!(log.len(), 4);
        let descriptions: Vec<_> = log.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                DAILY_TRANSFER_DESCRIPTION,
                SAVINGS_SWEEP_DESCRIPTION,
                SPENDING_DESCRIPTION,
                DAILY_TRANSFER_DESCRIPTION
            ]
        );
        assert_eq!(log.as_slice()[1].account, AccountKind::Savings);
    }

    #[test]
    fn test_transfer_rejected_when_main_short() {
        let clock = clock();
        let mut ledger = initialized(10000, 15000, &clock);
        let before = ledger.load().unwrap();

        let err = TransferService::new(&mut ledger, &clock)
            .trigger_daily_transfer()
            .unwrap_err();

        assert!(matches!(
            err,
            BudgetError::InsufficientBalance {
                account: AccountKind::Main,
                ..
            }
        ));
        assert_eq!(ledger.load().unwrap(), before);
    }

    #[test]
    fn test_transfer_allowed_when_main_equals_limit() {
        let clock = clock();
        let mut ledger = initialized(15000, 15000, &clock);

        let result = TransferService::new(&mut ledger, &clock)
            .trigger_daily_transfer()
            .unwrap();
        assert_eq!(result.balances.main, Money::zero());
    }

    #[test]
    fn test_spending_decreases_daily() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);
        let mut service = TransferService::new(&mut ledger, &clock);
        service.trigger_daily_transfer().unwrap();

        let result = service.record_spending(cents(4000)).unwrap();

        assert_eq!(result.remaining, cents(11000));
        assert_eq!(result.transaction.kind, TransactionKind::Debit);
        assert_eq!(result.transaction.description, SPENDING_DESCRIPTION);
        assert_eq!(ledger.balances().unwrap().daily, cents(11000));
        assert_eq!(ledger.transactions().unwrap().len(), 2);
    }

    #[test]
    fn test_spending_entire_daily_balance() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);
        let mut service = TransferService::new(&mut ledger, &clock);
        service.trigger_daily_transfer().unwrap();

        let result = service.record_spending(cents(15000)).unwrap();
        assert_eq!(result.remaining, Money::zero());
    }

    #[test]
    fn test_spending_rejections_leave_state_unchanged() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);
        TransferService::new(&mut ledger, &clock)
            .trigger_daily_transfer()
            .unwrap();
        let before = ledger.load().unwrap();

        let mut service = TransferService::new(&mut ledger, &clock);
        assert!(service.record_spending(Money::zero()).unwrap_err().is_invalid_amount());
        assert!(service.record_spending(cents(-500)).unwrap_err().is_invalid_amount());

        let err = service.record_spending(cents(20000)).unwrap_err();
        assert!(matches!(
            err,
            BudgetError::InsufficientBalance {
                account: AccountKind::Daily,
                ..
            }
        ));

        assert_eq!(ledger.load().unwrap(), before);
    }

    #[test]
    fn test_set_daily_limit() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);
        let mut service = TransferService::new(&mut ledger, &clock);
        service.trigger_daily_transfer().unwrap();

        let previous = service.set_daily_limit(cents(10000)).unwrap();
        assert_eq!(previous, cents(15000));
        assert!(service.set_daily_limit(Money::zero()).unwrap_err().is_invalid_amount());

        let state = ledger.load().unwrap();
        assert_eq!(state.daily_limit, cents(10000));
        // Daily keeps the old, larger refill; no record for a config change
        assert_eq!(state.balances.daily, cents(15000));
        assert_eq!(state.transactions.len(), 1);
    }

    #[test]
    fn test_reset_all_returns_to_uninitialized() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);
        let mut service = TransferService::new(&mut ledger, &clock);
        service.trigger_daily_transfer().unwrap();
        service.reset_all().unwrap();

        let state = ledger.load().unwrap();
        assert_eq!(state, LedgerState::default());
        assert!(ledger.store().get(LedgerKey::Initialized).is_none());
    }

    #[test]
    fn test_history_is_capped() {
        let clock = clock();
        let mut ledger = initialized(100000, 100000, &clock);
        let mut service = TransferService::new(&mut ledger, &clock);
        service.trigger_daily_transfer().unwrap();

        for _ in 0..(HISTORY_LIMIT + 10) {
            service.record_spending(cents(100)).unwrap();
        }

        let log = ledger.transactions().unwrap();
        assert_eq!(log.len(), HISTORY_LIMIT);
        // The oldest record (the transfer) was evicted
        assert!(log.iter().all(|t| t.description == SPENDING_DESCRIPTION));
        let ids: Vec<_> = log.iter().map(|t| t.id).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_every_movement_has_one_record() {
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock);
        let mut service = TransferService::new(&mut ledger, &clock);

        service.trigger_daily_transfer().unwrap(); // +1
        service.record_spending(cents(1000)).unwrap(); // +1
        service.trigger_daily_transfer().unwrap(); // sweep + transfer
        assert_eq!(ledger.transactions().unwrap().len(), 4);

        clock.next_day();
        DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap(); // sweep
        assert_eq!(ledger.transactions().unwrap().len(), 5);
    }

    #[test]
    fn test_daily_scenario() {
        let clock = clock();
        let mut ledger = Ledger::new(MemoryStore::new());

        let mut service = TransferService::new(&mut ledger, &clock);
        service.initialize(cents(100000), cents(15000)).unwrap();
        let transfer = service.trigger_daily_transfer().unwrap();
        assert_eq!(transfer.balances.main, cents(85000));
        assert_eq!(transfer.balances.daily, cents(15000));

        let spend = service.record_spending(cents(4000)).unwrap();
        assert_eq!(spend.remaining, cents(11000));
        assert_eq!(spend.transaction.amount, cents(4000));

        // Overspending is rejected with the daily balance untouched
        let err = service.record_spending(cents(20000)).unwrap_err();
        assert!(err.is_insufficient_balance());

        clock.next_day();
        clock.advance(Duration::hours(2));
        let outcome = DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();
        assert!(matches!(outcome, SweepOutcome::Swept { amount, .. } if amount == cents(11000)));

        let balances = ledger.balances().unwrap();
        assert_eq!(balances.savings, cents(11000));
        assert_eq!(balances.daily, Money::zero());
        assert_eq!(balances.main, cents(85000));
    }

    #[test]
    fn test_persists_through_file_store_and_audits() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("data").join("ledger.json");
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let clock = clock();

        {
            let mut ledger = Ledger::new(JsonFileStore::open(&store_path).unwrap())
                .with_audit(logger.clone());
            let mut service = TransferService::new(&mut ledger, &clock);
            service.initialize(cents(100000), cents(15000)).unwrap();
            service.trigger_daily_transfer().unwrap();
            service.record_spending(cents(4000)).unwrap();
        }

        let reopened = Ledger::new(JsonFileStore::open(&store_path).unwrap());
        assert_eq!(
            reopened.balances().unwrap(),
            Balances {
                main: cents(85000),
                daily: cents(11000),
                savings: Money::zero(),
            }
        );

        let operations: Vec<_> = logger
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(
            operations,
            vec![Operation::Initialize, Operation::DailyTransfer, Operation::Spending]
        );
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail_transfer() {
        let temp_dir = TempDir::new().unwrap();
        let clock = clock();
        let mut ledger = initialized(100000, 15000, &clock)
            .with_audit(AuditLogger::new(temp_dir.path().to_path_buf()));

        let result = TransferService::new(&mut ledger, &clock).trigger_daily_transfer();
        assert_eq!(result.unwrap().transferred, cents(15000));
        assert_eq!(ledger.balances().unwrap().main, cents(85000));
        assert!(ledger.take_audit_failure().is_some());
    }
}
