//! Review eligibility.
//!
//! An employee is eligible for a review in the active cycle when they are not
//! archived and were hired on or before the cutoff date (Oct 1 of the active
//! year by default). The bulk listing and the single-employee check both go
//! through [`classify_employee`] so they cannot disagree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ReviewRules;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Eligibility of a single employee for the active cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// Hired on or before the cutoff; a review can be started.
    Eligible,
    /// Hired after the cutoff; too new for this cycle.
    TooNew,
    /// Archived employees take no part in the review cycle.
    Archived,
}

/// The identity fields of an employee placed in an eligibility list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleEmployee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The date the employee joined the company.
    pub hire_date: NaiveDate,
}

impl From<&Employee> for EligibleEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            hire_date: employee.hire_date,
        }
    }
}

/// The partition of a candidate list into eligible and too-new employees.
///
/// Archived employees are dropped entirely and appear in neither list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// The hire-date cutoff the partition was made against.
    pub cutoff_date: NaiveDate,
    /// Employees who may be reviewed in this cycle.
    pub eligible: Vec<EligibleEmployee>,
    /// Employees hired after the cutoff.
    pub ineligible: Vec<EligibleEmployee>,
}

/// Returns the hire-date cutoff for the given active year.
///
/// # Example
///
/// ```
/// use review_engine::config::ReviewRules;
/// use review_engine::cycle::cutoff_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     cutoff_date(2025, &ReviewRules::default()).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
/// );
/// ```
pub fn cutoff_date(active_year: i32, rules: &ReviewRules) -> EngineResult<NaiveDate> {
    let day = rules.eligibility_cutoff;
    day.in_year(active_year)
        .ok_or_else(|| EngineError::InvalidRules {
            message: format!(
                "eligibility_cutoff {:02}-{:02} does not exist in {}",
                day.month, day.day, active_year
            ),
        })
}

/// Returns true if an employee hired on `hire_date` is old enough for the
/// cycle with the given cutoff. The boundary is inclusive.
pub fn is_hired_by_cutoff(hire_date: NaiveDate, cutoff: NaiveDate) -> bool {
    hire_date <= cutoff
}

/// Classifies one employee against the cutoff.
///
/// # Example
///
/// ```
/// use review_engine::cycle::{classify_employee, Eligibility};
/// use review_engine::models::{Employee, EmployeeStatus};
/// use chrono::NaiveDate;
///
/// let cutoff = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Anna Berger".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     status: EmployeeStatus::Active,
/// };
/// assert_eq!(classify_employee(&employee, cutoff), Eligibility::Eligible);
/// ```
pub fn classify_employee(employee: &Employee, cutoff: NaiveDate) -> Eligibility {
    if employee.is_archived() {
        Eligibility::Archived
    } else if is_hired_by_cutoff(employee.hire_date, cutoff) {
        Eligibility::Eligible
    } else {
        Eligibility::TooNew
    }
}

/// Partitions `employees` into eligible and too-new lists, dropping archived
/// employees. Input order is preserved within each list.
pub fn filter_eligibility(employees: &[Employee], cutoff: NaiveDate) -> EligibilityResult {
    let mut eligible = Vec::new();
    let mut ineligible = Vec::new();

    for employee in employees {
        match classify_employee(employee, cutoff) {
            Eligibility::Eligible => eligible.push(EligibleEmployee::from(employee)),
            Eligibility::TooNew => ineligible.push(EligibleEmployee::from(employee)),
            Eligibility::Archived => {}
        }
    }

    EligibilityResult {
        cutoff_date: cutoff,
        eligible,
        ineligible,
    }
}
