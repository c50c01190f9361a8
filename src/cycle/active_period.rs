//! Active review period resolution.
//!
//! Decides which configured review year is the one currently being worked on.
//! A period for year `Y` stays active until the grace-period end day in year
//! `Y + 1` (Aug 1 by default); afterwards the next period takes over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ReviewRules;
use crate::error::{EngineError, EngineResult};
use crate::models::ReviewPeriod;

use super::eligibility::cutoff_date;

/// How the active period was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// The oldest period whose grace window has not yet elapsed.
    GraceWindow,
    /// Every grace window has elapsed; the period with the largest year is used.
    LatestFallback,
}

/// The resolved active period and the dates derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePeriod {
    /// The selected period.
    pub period: ReviewPeriod,
    /// First day of the conversation window.
    pub window_start: NaiveDate,
    /// Last calendar day of the conversation window.
    pub window_end: NaiveDate,
    /// Day after which the next period becomes active.
    pub switchover_date: NaiveDate,
    /// Hire-date cutoff for eligibility in this cycle.
    pub cutoff_date: NaiveDate,
    /// Whether today lies inside `[window_start, window_end]`.
    pub is_currently_open: bool,
    /// How this period was selected.
    pub selection: Selection,
}

/// The outcome of resolving the active period for a given day.
///
/// Computed fresh on every evaluation and never stored. "A year is active" and
/// "its conversation window is open" are separate facts: a period can be
/// selected while its window has not opened yet or has already closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePeriodDecision {
    /// The day the decision was made for.
    pub evaluated_on: NaiveDate,
    /// The active period, absent when no period is configured.
    pub active: Option<ActivePeriod>,
}

impl ActivePeriodDecision {
    /// Returns the active review year, if any.
    pub fn active_year(&self) -> Option<i32> {
        self.active.as_ref().map(|a| a.period.year)
    }

    /// Returns true if a period is active and its window is open today.
    pub fn is_currently_open(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.is_currently_open)
    }
}

/// Returns the day until which the period of `year` stays active.
///
/// # Example
///
/// ```
/// use review_engine::config::ReviewRules;
/// use review_engine::cycle::switchover_date;
/// use chrono::NaiveDate;
///
/// let rules = ReviewRules::default();
/// assert_eq!(
///     switchover_date(2024, &rules).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
/// );
/// ```
pub fn switchover_date(year: i32, rules: &ReviewRules) -> EngineResult<NaiveDate> {
    let following = year.checked_add(1).ok_or_else(|| EngineError::InvalidPeriod {
        year,
        message: "no switchover date after the last representable year".to_string(),
    })?;
    let day = rules.grace_period_end;
    day.in_year(following).ok_or_else(|| EngineError::InvalidRules {
        message: format!(
            "grace_period_end {:02}-{:02} does not exist in {}",
            day.month, day.day, following
        ),
    })
}

/// Resolves the active review period for `today`.
///
/// # Algorithm
///
/// 1. Sort the periods ascending by year (input order does not matter).
/// 2. Select the first period whose switchover date is on or after `today`.
///    An older unexpired period wins over a newer one.
/// 3. If every switchover date has passed, fall back to the largest year.
/// 4. With no periods at all, the decision carries no active period.
///
/// `is_currently_open` is then derived from the selected period's own window,
/// independently of how it was selected.
///
/// # Example
///
/// ```
/// use review_engine::config::ReviewRules;
/// use review_engine::cycle::resolve_active_period;
/// use review_engine::models::ReviewPeriod;
/// use chrono::NaiveDate;
///
/// let period = |year| ReviewPeriod {
///     year,
///     start_month: 10,
///     start_year: year,
///     end_month: 2,
///     end_year: year + 1,
/// };
/// let periods = vec![period(2025), period(2023), period(2024)];
/// let rules = ReviewRules::default();
///
/// let today = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
/// let decision = resolve_active_period(&periods, today, &rules).unwrap();
/// assert_eq!(decision.active_year(), Some(2024));
///
/// let today = NaiveDate::from_ymd_opt(2025, 8, 2).unwrap();
/// let decision = resolve_active_period(&periods, today, &rules).unwrap();
/// assert_eq!(decision.active_year(), Some(2025));
/// ```
pub fn resolve_active_period(
    periods: &[ReviewPeriod],
    today: NaiveDate,
    rules: &ReviewRules,
) -> EngineResult<ActivePeriodDecision> {
    let mut sorted: Vec<&ReviewPeriod> = periods.iter().collect();
    sorted.sort_by_key(|p| p.year);

    let mut selected = None;
    for period in &sorted {
        let switchover = switchover_date(period.year, rules)?;
        if switchover >= today {
            selected = Some((*period, switchover, Selection::GraceWindow));
            break;
        }
    }

    if selected.is_none() {
        if let Some(latest) = sorted.last() {
            let switchover = switchover_date(latest.year, rules)?;
            selected = Some((*latest, switchover, Selection::LatestFallback));
        }
    }

    let Some((period, switchover, selection)) = selected else {
        return Ok(ActivePeriodDecision {
            evaluated_on: today,
            active: None,
        });
    };

    let (window_start, window_end) = period.window()?;

    Ok(ActivePeriodDecision {
        evaluated_on: today,
        active: Some(ActivePeriod {
            period: period.clone(),
            window_start,
            window_end,
            switchover_date: switchover,
            cutoff_date: cutoff_date(period.year, rules)?,
            is_currently_open: period.contains(today)?,
            selection,
        }),
    })
}
