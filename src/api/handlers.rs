//! HTTP request handlers for the Review Cycle Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;

use super::request::{EligibilityRequest, ReportQuery};
use super::response::{ApiError, ApiErrorResponse, PeriodView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/periods", get(list_periods_handler))
        .route("/periods/active", get(active_period_handler))
        .route("/periods/:year", get(period_handler))
        .route("/eligibility", post(eligibility_handler))
        .route(
            "/employees/:id/eligibility",
            get(employee_eligibility_handler),
        )
        .route("/reports/reviews", get(review_report_handler))
        .with_state(state)
}

/// Logs the outcome of a request and turns it into a JSON response.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    started: Instant,
    result: Result<T, ApiErrorResponse>,
) -> Response {
    let duration_us = started.elapsed().as_micros() as u64;
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                duration_us,
                "Request completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                status = err.status.as_u16(),
                code = %err.error.code,
                message = %err.error.message,
                duration_us,
                "Request failed"
            );
            err.into_response()
        }
    }
}

/// Maps a JSON body rejection to an API error.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for GET /periods.
async fn list_periods_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing review periods");
    let started = Instant::now();

    let result = state.service().catalog().and_then(|catalog| {
        catalog
            .iter()
            .cloned()
            .map(PeriodView::new)
            .collect::<EngineResult<Vec<_>>>()
    });

    respond(correlation_id, started, result.map_err(Into::into))
}

/// Handler for GET /periods/active.
async fn active_period_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Resolving active review period");
    let started = Instant::now();

    let result = state.service().active_period();
    respond(correlation_id, started, result.map_err(Into::into))
}

/// Handler for GET /periods/:year.
async fn period_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();

    let result = match year {
        Ok(Path(year)) => {
            info!(correlation_id = %correlation_id, year, "Fetching review period");
            state
                .service()
                .period_for_year(year)
                .and_then(PeriodView::new)
                .map_err(Into::into)
        }
        Err(rejection) => Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            rejection.body_text(),
        ))),
    };

    respond(correlation_id, started, result)
}

/// Handler for POST /eligibility.
async fn eligibility_handler(
    State(state): State<AppState>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();

    let result = match payload {
        Ok(Json(request)) => {
            info!(
                correlation_id = %correlation_id,
                employees = request.employee_ids.len(),
                "Processing eligibility request"
            );
            state
                .service()
                .eligibility(&request.employee_ids)
                .map_err(Into::into)
        }
        Err(rejection) => Err(json_rejection_error(correlation_id, rejection)),
    };

    respond(correlation_id, started, result)
}

/// Handler for GET /employees/:id/eligibility.
async fn employee_eligibility_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Checking employee eligibility"
    );
    let started = Instant::now();

    let result = state.service().employee_eligibility(&employee_id);
    respond(correlation_id, started, result.map_err(Into::into))
}

/// Handler for GET /reports/reviews.
async fn review_report_handler(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Aggregating review report");
    let started = Instant::now();

    let result = match query {
        Ok(Query(query)) => query.window().and_then(|window| {
            state
                .service()
                .review_report(window)
                .map_err(ApiErrorResponse::from)
        }),
        Err(rejection) => Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            rejection.body_text(),
        ))),
    };

    respond(correlation_id, started, result)
}
