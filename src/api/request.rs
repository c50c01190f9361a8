//! Request types for the Review Cycle Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ReportWindow;

use super::response::{ApiError, ApiErrorResponse};

/// Request body for the `/eligibility` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityRequest {
    /// The employees to classify.
    pub employee_ids: Vec<String>,
}

/// Query string of the `/reports/reviews` endpoint.
///
/// Both bounds must be given together; without them the active period's
/// conversation window is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    /// First day of the window (inclusive).
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Last day of the window (inclusive).
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl ReportQuery {
    /// Converts the query into a window, `None` when neither bound is given.
    pub fn window(&self) -> Result<Option<ReportWindow>, ApiErrorResponse> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Ok(Some(ReportWindow::new(from, to)?)),
            (None, None) => Ok(None),
            _ => Err(ApiErrorResponse::bad_request(ApiError::validation_error(
                "both 'from' and 'to' must be given",
            ))),
        }
    }
}
