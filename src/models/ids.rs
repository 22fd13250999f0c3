//! Transaction identifiers
//!
//! Records are identified by their creation time in epoch milliseconds. Two
//! records created in the same millisecond get consecutive values, so ids are
//! strictly increasing in creation order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Next id for a record created at `now`, given the newest existing id
    pub fn next(now: NaiveDateTime, newest: Option<TransactionId>) -> Self {
        let millis = now.and_utc().timestamp_millis();
        match newest {
            Some(prev) if prev.0 >= millis => Self(prev.0 + 1),
            _ => Self(millis),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
