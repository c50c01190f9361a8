//! Review period and period catalog models.
//!
//! This module contains the [`ReviewPeriod`] type describing one configured
//! annual review cycle, and the [`PeriodCatalog`] holding all of them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One configured annual review cycle ("Gesprächsjahr").
///
/// The conversation window runs from the first day of `start_month`/`start_year`
/// to the last calendar day of `end_month`/`end_year`, both inclusive.
///
/// # Example
///
/// ```
/// use review_engine::models::ReviewPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReviewPeriod {
///     year: 2024,
///     start_month: 11,
///     start_year: 2024,
///     end_month: 2,
///     end_year: 2025,
/// };
///
/// assert_eq!(period.start_date().unwrap(), NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
/// assert_eq!(period.end_date().unwrap(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPeriod {
    /// The review year this period belongs to (unique within a catalog).
    pub year: i32,
    /// Month in which the conversation window opens (1-12).
    pub start_month: u32,
    /// Year in which the conversation window opens.
    pub start_year: i32,
    /// Month in which the conversation window closes (1-12).
    pub end_month: u32,
    /// Year in which the conversation window closes.
    pub end_year: i32,
}

impl ReviewPeriod {
    /// Returns the first day of the conversation window.
    pub fn start_date(&self) -> EngineResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year, self.start_month, 1).ok_or_else(|| {
            self.invalid(format!("start month {} is out of range", self.start_month))
        })
    }

    /// Returns the last calendar day of the conversation window.
    ///
    /// Uses the true length of `end_month`, so February ends on the 28th or
    /// 29th depending on the year.
    pub fn end_date(&self) -> EngineResult<NaiveDate> {
        last_day_of_month(self.end_year, self.end_month)
            .ok_or_else(|| self.invalid(format!("end month {} is out of range", self.end_month)))
    }

    /// Returns the inclusive `(start, end)` window of this period.
    pub fn window(&self) -> EngineResult<(NaiveDate, NaiveDate)> {
        Ok((self.start_date()?, self.end_date()?))
    }

    /// Checks if `date` falls within the conversation window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> EngineResult<bool> {
        let (start, end) = self.window()?;
        Ok(start <= date && date <= end)
    }

    /// Validates month ranges and that the window does not end before it starts.
    pub fn validate(&self) -> EngineResult<()> {
        let (start, end) = self.window()?;
        if end < start {
            return Err(self.invalid(format!("window ends ({}) before it starts ({})", end, start)));
        }
        Ok(())
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidPeriod {
            year: self.year,
            message,
        }
    }
}

/// Returns the last day of the given month, accounting for leap years.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// The validated set of configured review periods.
///
/// Holds at most one period per year, sorted ascending by year.
///
/// # Example
///
/// ```
/// use review_engine::models::{PeriodCatalog, ReviewPeriod};
///
/// let period = |year| ReviewPeriod {
///     year,
///     start_month: 3,
///     start_year: year,
///     end_month: 6,
///     end_year: year,
/// };
///
/// let catalog = PeriodCatalog::new(vec![period(2025), period(2023)]).unwrap();
/// assert_eq!(catalog.latest().map(|p| p.year), Some(2025));
/// assert!(catalog.get(2024).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodCatalog {
    periods: Vec<ReviewPeriod>,
}

impl PeriodCatalog {
    /// Builds a catalog, rejecting invalid periods and duplicate years.
    pub fn new(mut periods: Vec<ReviewPeriod>) -> EngineResult<Self> {
        for period in &periods {
            period.validate()?;
        }

        periods.sort_by_key(|p| p.year);
        if let Some(pair) = periods.windows(2).find(|pair| pair[0].year == pair[1].year) {
            return Err(EngineError::DuplicatePeriod { year: pair[0].year });
        }

        Ok(Self { periods })
    }

    /// Returns the period configured for `year`.
    pub fn get(&self, year: i32) -> Option<&ReviewPeriod> {
        self.periods
            .binary_search_by_key(&year, |p| p.year)
            .ok()
            .map(|idx| &self.periods[idx])
    }

    /// Returns the period with the largest year.
    pub fn latest(&self) -> Option<&ReviewPeriod> {
        self.periods.last()
    }

    /// Returns all periods, sorted ascending by year.
    pub fn periods(&self) -> &[ReviewPeriod] {
        &self.periods
    }

    /// Iterates over the periods in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = &ReviewPeriod> {
        self.periods.iter()
    }

    /// Returns the number of configured periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if no period is configured.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
