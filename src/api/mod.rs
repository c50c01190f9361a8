//! HTTP API module for the Review Cycle Engine.
//!
//! This module exposes the active period decision, eligibility listings and
//! review reports as plain JSON data. Rendering, localisation and date
//! formatting are left to the presentation layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EligibilityRequest, ReportQuery};
pub use response::{ApiError, ApiErrorResponse, PeriodView};
pub use state::AppState;
