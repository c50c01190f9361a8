//! Storage collaborator for the Review Cycle Engine.
//!
//! Persistence is owned by the surrounding HR application. This module only
//! defines the contract the engine reads through, plus an in-memory
//! implementation used by tests and demos.

mod memory;

pub use memory::{InMemoryStore, StoreFixture};

use crate::models::{Employee, ReportWindow, ReviewPeriod, ReviewRecord};

/// Error enumeration for storage failures.
///
/// Storage errors are fatal for the request that hit them: the engine never
/// retries or substitutes a default.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A query could not be prepared or executed.
    #[error("query failed: {0}")]
    Query(String),
    /// A row could not be mapped to a model (e.g. an unparsable date).
    #[error("malformed row '{id}': {message}")]
    MalformedRow {
        /// Identifier of the offending row.
        id: String,
        /// What was wrong with it.
        message: String,
    },
}

/// Read access to the data the review cycle logic consumes.
pub trait ReviewStore: Send + Sync {
    /// Lists all configured review periods, in any order.
    fn list_periods(&self) -> Result<Vec<ReviewPeriod>, StorageError>;

    /// Lists the employees with the given identifiers. Unknown identifiers
    /// are skipped.
    fn list_employees(&self, ids: &[String]) -> Result<Vec<Employee>, StorageError>;

    /// Looks up a single employee.
    fn find_employee(&self, id: &str) -> Result<Option<Employee>, StorageError>;

    /// Lists the review records dated within `window`.
    fn list_review_records(&self, window: &ReportWindow)
    -> Result<Vec<ReviewRecord>, StorageError>;
}
