//! Error types for the Review Cycle Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving review periods,
//! checking eligibility, and aggregating review reports.

use chrono::NaiveDate;
use thiserror::Error;

use crate::storage::StorageError;

/// The main error type for the Review Cycle Engine.
///
/// All operations in the engine return this error type. Storage failures are
/// wrapped rather than swallowed so callers can surface them.
///
/// # Example
///
/// ```
/// use review_engine::error::EngineError;
///
/// let error = EngineError::PeriodNotFound { year: 2025 };
/// assert_eq!(error.to_string(), "No review period configured for year 2025");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The review rules are not usable (e.g. a cutoff day that does not exist).
    #[error("Invalid review rules: {message}")]
    InvalidRules {
        /// A description of what made the rules invalid.
        message: String,
    },

    /// A configured review period has impossible boundaries.
    #[error("Invalid review period {year}: {message}")]
    InvalidPeriod {
        /// The year key of the offending period.
        year: i32,
        /// A description of what made the period invalid.
        message: String,
    },

    /// More than one review period was configured for the same year.
    #[error("Duplicate review period for year {year}")]
    DuplicatePeriod {
        /// The duplicated year key.
        year: i32,
    },

    /// No review period is configured for the requested year.
    #[error("No review period configured for year {year}")]
    PeriodNotFound {
        /// The requested year.
        year: i32,
    },

    /// No review period is configured at all, so no cycle is active.
    #[error("No active review period is defined")]
    NoActivePeriod,

    /// The requested employee does not exist in storage.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        id: String,
    },

    /// A report window whose end lies before its start.
    #[error("Invalid report window: {from} is after {to}")]
    InvalidReportWindow {
        /// The requested start of the window.
        from: NaiveDate,
        /// The requested end of the window.
        to: NaiveDate,
    },

    /// The storage collaborator failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_invalid_period_displays_year_and_message() {
        let error = EngineError::InvalidPeriod {
            year: 2024,
            message: "end month 13 is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid review period 2024: end month 13 is out of range"
        );
    }

    #[test]
    fn test_duplicate_period_displays_year() {
        let error = EngineError::DuplicatePeriod { year: 2023 };
        assert_eq!(error.to_string(), "Duplicate review period for year 2023");
    }

    #[test]
    fn test_invalid_report_window_displays_dates() {
        let error = EngineError::InvalidReportWindow {
            from: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid report window: 2025-06-01 is after 2025-01-01"
        );
    }

    #[test]
    fn test_storage_error_converts_with_question_mark() {
        fn fails() -> Result<(), StorageError> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }

        fn propagates() -> EngineResult<()> {
            fails()?;
            Ok(())
        }

        match propagates() {
            Err(EngineError::Storage(StorageError::Unavailable(msg))) => {
                assert_eq!(msg, "connection refused");
            }
            other => panic!("Expected storage error, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }
}
