//! Request-scoped review cycle operations.
//!
//! [`ReviewCycleService`] wires the pure cycle functions to a storage
//! collaborator and a clock. Nothing is cached between calls: every
//! operation reloads what it needs and recomputes the active period.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::config::ReviewRules;
use crate::cycle::{
    ActivePeriod, ActivePeriodDecision, Eligibility, EligibilityResult, EligibleEmployee,
    ReviewReport, Selection, classify_employee, filter_eligibility, resolve_active_period,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodCatalog, ReportWindow, ReviewPeriod};
use crate::storage::ReviewStore;

/// Single-employee eligibility for the active cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeEligibility {
    /// The employee checked.
    pub employee: EligibleEmployee,
    /// The active review year.
    pub active_year: i32,
    /// The hire-date cutoff of the active year.
    pub cutoff_date: NaiveDate,
    /// The outcome: eligible, too new, or archived.
    pub eligibility: Eligibility,
}

/// Eligibility listing for the active cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleEligibility {
    /// The active review year.
    pub active_year: i32,
    /// The partition of the requested employees.
    #[serde(flatten)]
    pub result: EligibilityResult,
}

/// Composes the storage collaborator, the clock and the review rules.
#[derive(Clone)]
pub struct ReviewCycleService {
    store: Arc<dyn ReviewStore>,
    clock: Arc<dyn Clock>,
    rules: ReviewRules,
}

impl ReviewCycleService {
    /// Creates a service over the given collaborators.
    pub fn new(store: Arc<dyn ReviewStore>, clock: Arc<dyn Clock>, rules: ReviewRules) -> Self {
        Self {
            store,
            clock,
            rules,
        }
    }

    /// Returns the review rules in use.
    pub fn rules(&self) -> &ReviewRules {
        &self.rules
    }

    /// Returns today's date according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Loads and validates the period catalog.
    pub fn catalog(&self) -> EngineResult<PeriodCatalog> {
        PeriodCatalog::new(self.store.list_periods()?)
    }

    /// Returns the period configured for `year`.
    pub fn period_for_year(&self, year: i32) -> EngineResult<ReviewPeriod> {
        self.catalog()?
            .get(year)
            .cloned()
            .ok_or(EngineError::PeriodNotFound { year })
    }

    /// Resolves the active period for today.
    pub fn active_period(&self) -> EngineResult<ActivePeriodDecision> {
        let catalog = self.catalog()?;
        let today = self.clock.today();
        let decision = resolve_active_period(catalog.periods(), today, &self.rules)?;

        match &decision.active {
            Some(active) => debug!(
                today = %today,
                active_year = active.period.year,
                is_currently_open = active.is_currently_open,
                fallback = active.selection == Selection::LatestFallback,
                "Resolved active review period"
            ),
            None => warn!(today = %today, "No review period is configured"),
        }

        Ok(decision)
    }

    fn require_active(&self) -> EngineResult<ActivePeriod> {
        self.active_period()?
            .active
            .ok_or(EngineError::NoActivePeriod)
    }

    /// Partitions the given employees by eligibility for the active cycle.
    ///
    /// Repeated ids are checked once, keeping the first occurrence's position.
    pub fn eligibility(&self, employee_ids: &[String]) -> EngineResult<CycleEligibility> {
        let active = self.require_active()?;

        let mut seen = HashSet::new();
        let unique_ids: Vec<String> = employee_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        let employees = self.store.list_employees(&unique_ids)?;
        let result = filter_eligibility(&employees, active.cutoff_date);

        debug!(
            active_year = active.period.year,
            requested = employee_ids.len(),
            unique = unique_ids.len(),
            eligible = result.eligible.len(),
            ineligible = result.ineligible.len(),
            "Computed review eligibility"
        );

        Ok(CycleEligibility {
            active_year: active.period.year,
            result,
        })
    }

    /// Checks whether one employee can be reviewed in the active cycle.
    pub fn employee_eligibility(&self, employee_id: &str) -> EngineResult<EmployeeEligibility> {
        let active = self.require_active()?;
        let employee = self
            .store
            .find_employee(employee_id)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        Ok(EmployeeEligibility {
            eligibility: classify_employee(&employee, active.cutoff_date),
            employee: EligibleEmployee::from(&employee),
            active_year: active.period.year,
            cutoff_date: active.cutoff_date,
        })
    }

    /// Aggregates the review report for `window`, or for the active period's
    /// conversation window when none is given.
    pub fn review_report(&self, window: Option<ReportWindow>) -> EngineResult<ReviewReport> {
        let window = match window {
            Some(window) => window,
            None => ReportWindow::for_period(&self.require_active()?.period)?,
        };

        let records = self.store.list_review_records(&window)?;
        let report = ReviewReport::aggregate(window, &records, &self.rules);

        debug!(
            from = %window.from,
            to = %window.to,
            records = records.len(),
            reported = report.overall.total,
            "Aggregated review report"
        );

        Ok(report)
    }
}
