//! In-memory [`ReviewStore`] implementation.

use std::path::Path;

use serde::Deserialize;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{Employee, ReportWindow, ReviewPeriod, ReviewRecord};

use super::{ReviewStore, StorageError};

/// Fixture file structure for [`InMemoryStore::from_yaml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreFixture {
    /// Configured review periods.
    #[serde(default)]
    pub periods: Vec<ReviewPeriod>,
    /// Known employees.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Held review conversations.
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

/// A store backed by plain vectors.
///
/// # Example
///
/// ```
/// use review_engine::models::ReviewPeriod;
/// use review_engine::storage::{InMemoryStore, ReviewStore};
///
/// let store = InMemoryStore::default().with_periods(vec![ReviewPeriod {
///     year: 2025,
///     start_month: 3,
///     start_year: 2025,
///     end_month: 6,
///     end_year: 2025,
/// }]);
/// assert_eq!(store.list_periods().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    periods: Vec<ReviewPeriod>,
    employees: Vec<Employee>,
    reviews: Vec<ReviewRecord>,
}

impl InMemoryStore {
    /// Builds a store from a fixture.
    pub fn from_fixture(fixture: StoreFixture) -> Self {
        Self {
            periods: fixture.periods,
            employees: fixture.employees,
            reviews: fixture.reviews,
        }
    }

    /// Loads a store from a YAML fixture file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let fixture = ConfigLoader::load_yaml::<StoreFixture>(path.as_ref())?;
        Ok(Self::from_fixture(fixture))
    }

    /// Replaces the configured periods.
    pub fn with_periods(mut self, periods: Vec<ReviewPeriod>) -> Self {
        self.periods = periods;
        self
    }

    /// Replaces the known employees.
    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    /// Replaces the held reviews.
    pub fn with_reviews(mut self, reviews: Vec<ReviewRecord>) -> Self {
        self.reviews = reviews;
        self
    }
}

impl ReviewStore for InMemoryStore {
    fn list_periods(&self) -> Result<Vec<ReviewPeriod>, StorageError> {
        Ok(self.periods.clone())
    }

    fn list_employees(&self, ids: &[String]) -> Result<Vec<Employee>, StorageError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.employees.iter().find(|e| &e.id == id))
            .cloned()
            .collect())
    }

    fn find_employee(&self, id: &str) -> Result<Option<Employee>, StorageError> {
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }

    fn list_review_records(
        &self,
        window: &ReportWindow,
    ) -> Result<Vec<ReviewRecord>, StorageError> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| window.contains(r.date))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_uppercase(),
            hire_date: date(2020, 1, 1),
            status: EmployeeStatus::Active,
        }
    }

    fn review(id: &str, on: NaiveDate) -> ReviewRecord {
        ReviewRecord {
            employee_id: id.to_string(),
            name: id.to_uppercase(),
            employee_status: EmployeeStatus::Active,
            date: on,
            wage_schema: "Technik".to_string(),
            position: "Elektrik".to_string(),
            satisfaction: None,
            dissatisfaction_reason: None,
            talent_review_date: None,
        }
    }

    #[test]
    fn test_list_employees_follows_requested_order_and_skips_unknown() {
        let store =
            InMemoryStore::default().with_employees(vec![employee("a"), employee("b")]);
        let ids = vec!["b".to_string(), "zzz".to_string(), "a".to_string()];

        let found: Vec<String> = store
            .list_employees(&ids)
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(found, vec!["b", "a"]);
    }

    #[test]
    fn test_find_employee() {
        let store = InMemoryStore::default().with_employees(vec![employee("a")]);
        assert!(store.find_employee("a").unwrap().is_some());
        assert!(store.find_employee("b").unwrap().is_none());
    }

    #[test]
    fn test_review_records_are_filtered_to_inclusive_window() {
        let store = InMemoryStore::default().with_reviews(vec![
            review("before", date(2024, 12, 31)),
            review("first", date(2025, 1, 1)),
            review("last", date(2025, 3, 31)),
            review("after", date(2025, 4, 1)),
        ]);
        let window = ReportWindow::new(date(2025, 1, 1), date(2025, 3, 31)).unwrap();

        let ids: Vec<String> = store
            .list_review_records(&window)
            .unwrap()
            .into_iter()
            .map(|r| r.employee_id)
            .collect();
        assert_eq!(ids, vec!["first", "last"]);
    }

    #[test]
    fn test_load_fixture_file() {
        let store = InMemoryStore::from_yaml("./config/default/fixture.yaml").unwrap();
        assert_eq!(store.list_periods().unwrap().len(), 3);
        assert!(store.find_employee("emp_001").unwrap().is_some());
    }
}
