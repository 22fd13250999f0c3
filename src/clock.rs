//! Time source for date-dependent operations
//!
//! The day-boundary sweep and every transaction timestamp read the current
//! local time through [`Clock`], so tests can pin or advance the date.

use std::cell::Cell;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

pub trait Clock {
    /// Current device-local wall-clock time
    fn now(&self) -> NaiveDateTime;

    /// Current device-local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The system clock in the device's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A manually controlled clock
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Clock at the given date, 09:00
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(9, 0, 0).unwrap_or_default())
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move to the same time on the next calendar day
    pub fn next_day(&self) {
        self.advance(Duration::days(1));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
