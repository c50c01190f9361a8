//! Employee model and related types.
//!
//! Employees are owned by the surrounding HR application; this module only
//! models the fields the review cycle logic consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment status as far as the review cycle is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// A current member of staff.
    Active,
    /// The archival sentinel: the employee has left the company.
    Archived,
}

/// Represents an employee considered for a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, used for alphabetical ordering in reports.
    pub name: String,
    /// The date the employee joined the company.
    pub hire_date: NaiveDate,
    /// Active or archived.
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee carries the archival sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use review_engine::models::{Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Anna Berger".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
    ///     status: EmployeeStatus::Archived,
    /// };
    /// assert!(employee.is_archived());
    /// ```
    pub fn is_archived(&self) -> bool {
        self.status == EmployeeStatus::Archived
    }
}
