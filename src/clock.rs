//! Injectable source of "today".
//!
//! Period resolution depends on the current date. Passing a [`Clock`] instead
//! of reading the system time directly keeps that logic testable.

use chrono::{Local, NaiveDate};

/// Provides the current local calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date. No timezone conversion is applied.
    fn today(&self) -> NaiveDate;
}

/// The host's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
///
/// # Example
///
/// ```
/// use review_engine::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
