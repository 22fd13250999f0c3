//! Day-boundary monitor
//!
//! Settles the previous day when the program starts on a new calendar date:
//! unspent daily funds move to savings and the daily account is emptied. The
//! daily account is not refilled here; that only happens through a manual
//! transfer.

use chrono::{NaiveDate, NaiveDateTime};

use crate::audit::{AuditEntry, Operation};
use crate::clock::Clock;
use crate::error::BudgetResult;
use crate::models::{AccountKind, Money, Transaction};
use crate::storage::{KeyValueStore, Ledger, LedgerState};

pub const AUTO_SWEEP_DESCRIPTION: &str = "Auto-transfer to Savings";

/// What a reconcile pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Ledger has not been set up; nothing to settle
    NotInitialized,
    /// Already settled for today (or the stored date is ahead of the clock)
    UpToDate,
    /// New day with nothing left in the daily account
    Reset { previous: Option<NaiveDate> },
    /// New day; the leftover daily balance moved to savings
    Swept {
        amount: Money,
        previous: Option<NaiveDate>,
    },
}

impl SweepOutcome {
    pub fn changed_state(&self) -> bool {
        matches!(self, SweepOutcome::Reset { .. } | SweepOutcome::Swept { .. })
    }
}

pub struct DayBoundaryService<'a, S: KeyValueStore> {
    ledger: &'a mut Ledger<S>,
    clock: &'a dyn Clock,
}

impl<'a, S: KeyValueStore> DayBoundaryService<'a, S> {
    pub fn new(ledger: &'a mut Ledger<S>, clock: &'a dyn Clock) -> Self {
        Self { ledger, clock }
    }

    /// Settle the previous day if the calendar date has changed
    ///
    /// Running it again on the same date is a no-op.
    pub fn reconcile(&mut self) -> BudgetResult<SweepOutcome> {
        let mut state = self.ledger.load()?;
        if !state.initialized {
            return Ok(SweepOutcome::NotInitialized);
        }

        let today = self.clock.today();
        let previous = state.last_transfer_date;
        if matches!(previous, Some(last) if last >= today) {
            return Ok(SweepOutcome::UpToDate);
        }

        let before = state.balances;
        let swept = sweep_to_savings(&mut state, AUTO_SWEEP_DESCRIPTION, self.clock.now());
        state.balances.daily = Money::zero();
        state.last_transfer_date = Some(today);

        self.ledger.save(&state)?;

        let mut entry = AuditEntry::new(Operation::DaySweep).with_balances(before, state.balances);
        if let Some(amount) = swept {
            entry = entry.with_amount(amount);
        }
        self.ledger.record(entry);

        Ok(match swept {
            Some(amount) => SweepOutcome::Swept { amount, previous },
            None => SweepOutcome::Reset { previous },
        })
    }
}

/// Move the whole daily balance to savings, logging one credit record
///
/// Returns the amount moved, or `None` when the daily account was empty.
pub(crate) fn sweep_to_savings(
    state: &mut LedgerState,
    description: &str,
    now: NaiveDateTime,
) -> Option<Money> {
    let leftover = state.balances.daily;
    if !leftover.is_positive() {
        return None;
    }

    state.balances.savings += leftover;
    state.balances.daily = Money::zero();
    let id = state.transactions.next_id(now);
    state.transactions.push(Transaction::credit(
        id,
        description,
        leftover,
        AccountKind::Savings,
        now,
    ));

    Some(leftover)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Balances, TransactionKind};
    use crate::storage::MemoryStore;
    use chrono::Duration;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn ledger_with(daily_cents: i64, last: NaiveDate) -> Ledger<MemoryStore> {
        let mut ledger = Ledger::new(MemoryStore::new());
        let state = LedgerState {
            initialized: true,
            balances: Balances {
                main: Money::from_cents(85000),
                daily: Money::from_cents(daily_cents),
                savings: Money::from_cents(500),
            },
            daily_limit: Money::from_cents(15000),
            last_transfer_date: Some(last),
            ..LedgerState::default()
        };
        ledger.save(&state).unwrap();
        ledger
    }

    #[test]
    fn test_same_day_is_noop() {
        let mut ledger = ledger_with(11000, day(14));
        let clock = FixedClock::at_date(day(14));

        let before = ledger.load().unwrap();
        let outcome = DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();

        assert_eq!(outcome, SweepOutcome::UpToDate);
        assert!(!outcome.changed_state());
        assert_eq!(ledger.load().unwrap(), before);
    }

    #[test]
    fn test_new_day_sweeps_leftover() {
        let mut ledger = ledger_with(11000, day(14));
        let clock = FixedClock::at_date(day(15));

        let outcome = DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();
        assert_eq!(
            outcome,
            SweepOutcome::Swept {
                amount: Money::from_cents(11000),
                previous: Some(day(14)),
            }
        );

        let state = ledger.load().unwrap();
        assert_eq!(state.balances.daily, Money::zero());
        assert_eq!(state.balances.savings, Money::from_cents(11500));
        assert_eq!(state.balances.main, Money::from_cents(85000));
        assert_eq!(state.last_transfer_date, Some(day(15)));

        assert_eq!(state.transactions.len(), 1);
        let txn = state.transactions.newest().unwrap();
        assert_eq!(txn.description, AUTO_SWEEP_DESCRIPTION);
        assert_eq!(txn.kind, TransactionKind::Credit);
        assert_eq!(txn.account, AccountKind::Savings);
        assert_eq!(txn.amount, Money::from_cents(11000));
    }

    #[test]
    fn test_second_run_same_day_is_idempotent() {
        let mut ledger = ledger_with(11000, day(14));
        let clock = FixedClock::at_date(day(15));

        DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();
        let after_first = ledger.load().unwrap();

        clock.advance(Duration::hours(3));
        let outcome = DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();

        assert_eq!(outcome, SweepOutcome::UpToDate);
        assert_eq!(ledger.load().unwrap(), after_first);
    }

    #[test]
    fn test_empty_daily_resets_without_record() {
        let mut ledger = ledger_with(0, day(14));
        let clock = FixedClock::at_date(day(16));

        let outcome = DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();
        assert_eq!(outcome, SweepOutcome::Reset { previous: Some(day(14)) });

        let state = ledger.load().unwrap();
        assert!(state.transactions.is_empty());
        assert_eq!(state.last_transfer_date, Some(day(16)));
    }

    #[test]
    fn test_sweep_does_not_refill_daily() {
        let mut ledger = ledger_with(5000, day(14));
        let clock = FixedClock::at_date(day(15));

        DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();

        let state = ledger.load().unwrap();
        assert_eq!(state.balances.daily, Money::zero());
        assert_eq!(state.balances.main, Money::from_cents(85000));
    }

    #[test]
    fn test_clock_rollback_never_moves_date_backward() {
        let mut ledger = ledger_with(11000, day(20));
        let clock = FixedClock::at_date(day(15));

        let outcome = DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();

        assert_eq!(outcome, SweepOutcome::UpToDate);
        assert_eq!(ledger.last_transfer_date().unwrap(), Some(day(20)));
        assert_eq!(ledger.balances().unwrap().daily, Money::from_cents(11000));
    }

    #[test]
    fn test_uninitialized_store_is_left_untouched() {
        let mut ledger = Ledger::new(MemoryStore::new());
        let clock = FixedClock::at_date(day(15));

        let outcome = DayBoundaryService::new(&mut ledger, &clock).reconcile().unwrap();

        assert_eq!(outcome, SweepOutcome::NotInitialized);
        assert!(ledger.store().is_empty());
    }
}
