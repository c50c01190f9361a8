//! Configuration loading and management for the Review Cycle Engine.
//!
//! This module provides the review calendar rules (grace window, eligibility
//! cutoff, dissatisfaction keywords) and loads them from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use review_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Seed periods: {}", config.periods().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_DISSATISFACTION_KEYWORDS, ELIGIBILITY_CUTOFF_MONTH_DAY, GRACE_PERIOD_END_MONTH_DAY,
    MonthDay, PeriodsConfig, ReviewRules,
};
