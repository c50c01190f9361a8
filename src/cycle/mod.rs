//! Review cycle logic for the Review Cycle Engine.
//!
//! This module contains the pure functions behind the review cycle: active
//! period resolution under the trailing grace rule, hire-date eligibility
//! against the cycle's cutoff, the free-text category rules, and the report
//! aggregation used by the dashboards.

mod active_period;
mod category;
mod eligibility;
mod report;

pub use active_period::{
    ActivePeriod, ActivePeriodDecision, Selection, resolve_active_period, switchover_date,
};
pub use category::{
    QUALITY_POSITION_KEYWORDS, QualityUnit, ReviewCategory, TechnikDiscipline,
    WAGE_SCHEMA_PRODUKTION, WAGE_SCHEMA_TECHNIK, classify_review,
};
pub use eligibility::{
    Eligibility, EligibilityResult, EligibleEmployee, classify_employee, cutoff_date,
    filter_eligibility, is_hired_by_cutoff,
};
pub use report::{
    BucketSummary, ReasonCount, ReportRow, ReviewReport, SatisfactionShares, SatisfactionTally,
    percentage,
};
