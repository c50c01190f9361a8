//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading review rules
//! and the seed period catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodCatalog, ReviewPeriod};

use super::types::{PeriodsConfig, ReviewRules};

/// Loads and provides access to review cycle configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rules.yaml    # Grace window, cutoff day, reason keywords
/// └── periods.yaml  # Optional seed catalog of review periods
/// ```
///
/// # Example
///
/// ```no_run
/// use review_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Cutoff month: {}", loader.rules().eligibility_cutoff.month);
/// # Ok::<(), review_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: ReviewRules,
    periods: Vec<ReviewPeriod>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `rules.yaml` is missing or invalid, or if
    /// `periods.yaml` exists but does not describe a valid catalog.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<ReviewRules>(&path.join("rules.yaml"))?;
        rules.validate()?;

        let periods_path = path.join("periods.yaml");
        let periods = if periods_path.exists() {
            Self::load_yaml::<PeriodsConfig>(&periods_path)?.periods
        } else {
            Vec::new()
        };

        // Reject a broken seed catalog at load time rather than per request.
        PeriodCatalog::new(periods.clone())?;

        Ok(Self { rules, periods })
    }

    /// Loads and parses a YAML file.
    pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded review rules.
    pub fn rules(&self) -> &ReviewRules {
        &self.rules
    }

    /// Returns the seed review periods from `periods.yaml`.
    pub fn periods(&self) -> &[ReviewPeriod] {
        &self.periods
    }

    /// Splits the loader into its rules and seed periods.
    pub fn into_parts(self) -> (ReviewRules, Vec<ReviewPeriod>) {
        (self.rules, self.periods)
    }
}
