//! Configuration types for review cycle rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the named constants
//! that encode the business calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ReviewPeriod;

/// A calendar day within a year, independent of the year itself.
///
/// # Example
///
/// ```
/// use review_engine::config::MonthDay;
/// use chrono::NaiveDate;
///
/// let day = MonthDay { month: 10, day: 1 };
/// assert_eq!(day.in_year(2025), NaiveDate::from_ymd_opt(2025, 10, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    /// Month of the year (1-12).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}

impl MonthDay {
    /// Returns this month/day in the given year, if it exists in that year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// Checks that this month/day exists in every year.
    ///
    /// February 29th is rejected because it would make the rule undefined in
    /// three out of four years.
    pub fn validate(&self, name: &str) -> EngineResult<()> {
        // 2023 is not a leap year, so Feb 29 fails here.
        if self.in_year(2023).is_none() {
            return Err(EngineError::InvalidRules {
                message: format!(
                    "{} {:02}-{:02} is not a calendar day in every year",
                    name, self.month, self.day
                ),
            });
        }
        Ok(())
    }
}

/// The day in year `Y + 1` until which the period of year `Y` stays active.
pub const GRACE_PERIOD_END_MONTH_DAY: MonthDay = MonthDay { month: 8, day: 1 };

/// The day in the active year after which new hires are too new for a review.
pub const ELIGIBILITY_CUTOFF_MONTH_DAY: MonthDay = MonthDay { month: 10, day: 1 };

/// Keywords counted in dissatisfaction reasons on the review dashboards.
pub const DEFAULT_DISSATISFACTION_KEYWORDS: [&str; 4] =
    ["arbeitsbedingungen", "entwicklung", "klima", "persönlich"];

fn default_grace_period_end() -> MonthDay {
    GRACE_PERIOD_END_MONTH_DAY
}

fn default_eligibility_cutoff() -> MonthDay {
    ELIGIBILITY_CUTOFF_MONTH_DAY
}

fn default_keywords() -> Vec<String> {
    DEFAULT_DISSATISFACTION_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// Business rules governing the review cycle.
///
/// Every field has a default, so an empty `rules.yaml` yields the standard
/// calendar (grace window until Aug 1, cutoff on Oct 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRules {
    /// Day in the following year until which a period stays active.
    #[serde(default = "default_grace_period_end")]
    pub grace_period_end: MonthDay,
    /// Day in the active year used as the hire-date cutoff.
    #[serde(default = "default_eligibility_cutoff")]
    pub eligibility_cutoff: MonthDay,
    /// Lower-case keywords tallied in dissatisfaction reasons.
    #[serde(default = "default_keywords")]
    pub dissatisfaction_keywords: Vec<String>,
}

impl Default for ReviewRules {
    fn default() -> Self {
        Self {
            grace_period_end: GRACE_PERIOD_END_MONTH_DAY,
            eligibility_cutoff: ELIGIBILITY_CUTOFF_MONTH_DAY,
            dissatisfaction_keywords: default_keywords(),
        }
    }
}

impl ReviewRules {
    /// Validates that both calendar rules name real days.
    pub fn validate(&self) -> EngineResult<()> {
        self.grace_period_end.validate("grace_period_end")?;
        self.eligibility_cutoff.validate("eligibility_cutoff")?;
        Ok(())
    }
}

/// Periods configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodsConfig {
    /// The configured review periods, in any order.
    #[serde(default)]
    pub periods: Vec<ReviewPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_use_named_constants() {
        let rules = ReviewRules::default();
        assert_eq!(rules.grace_period_end, MonthDay { month: 8, day: 1 });
        assert_eq!(rules.eligibility_cutoff, MonthDay { month: 10, day: 1 });
        assert_eq!(rules.dissatisfaction_keywords.len(), 4);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_yields_default_rules() {
        let rules: ReviewRules = serde_yaml::from_str("{}").unwrap();
        assert_eq!(rules, ReviewRules::default());
    }

    #[test]
    fn test_partial_yaml_overrides_single_rule() {
        let yaml = "eligibility_cutoff:\n  month: 9\n  day: 15\n";
        let rules: ReviewRules = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.eligibility_cutoff, MonthDay { month: 9, day: 15 });
        assert_eq!(rules.grace_period_end, GRACE_PERIOD_END_MONTH_DAY);
    }

    #[test]
    fn test_feb_29_is_rejected() {
        let day = MonthDay { month: 2, day: 29 };
        match day.validate("eligibility_cutoff") {
            Err(EngineError::InvalidRules { message }) => {
                assert!(message.contains("eligibility_cutoff 02-29"));
            }
            other => panic!("Expected InvalidRules, got {:?}", other),
        }
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        let rules = ReviewRules {
            grace_period_end: MonthDay { month: 13, day: 1 },
            ..ReviewRules::default()
        };
        assert!(rules.validate().is_err());
    }
}
