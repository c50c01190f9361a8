//! Core data models for the Review Cycle Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod review_period;
mod review_record;

pub use employee::{Employee, EmployeeStatus};
pub use review_period::{PeriodCatalog, ReviewPeriod, last_day_of_month};
pub use review_record::{ReportWindow, ReviewRecord, Satisfaction};
