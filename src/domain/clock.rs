/// Source of "today" for all date arithmetic
///
/// Every streak and rate computation is relative to a single current date.
/// Injecting it keeps the calculators deterministic under test.

use chrono::{NaiveDate, Utc};
use std::sync::{Arc, Mutex};

/// Supplies the current calendar date
pub trait Clock: Send + Sync {
    /// The calendar date considered "today"
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time (UTC calendar date)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().naive_utc().date()
    }
}

/// Clock pinned to a given date
///
/// The date can be moved with `set` so tests can step through days.
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Move the clock to another date
    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap_or_else(|e| e.into_inner()) = today;
    }

    /// Advance the clock by a number of days
    pub fn advance_days(&self, days: i64) {
        let mut today = self.today.lock().unwrap_or_else(|e| e.into_inner());
        *today = *today + chrono::Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
