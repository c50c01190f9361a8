//! Integration tests for the Review Cycle Engine HTTP API.
//!
//! This test suite covers:
//! - Active period resolution across the grace window
//! - Period lookup by year
//! - Bulk and single-employee eligibility
//! - Review report aggregation and ordering
//! - Error cases (empty catalog, unknown employee, storage failure)

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use review_engine::api::{AppState, create_router};
use review_engine::clock::FixedClock;
use review_engine::config::ConfigLoader;
use review_engine::models::{Employee, ReportWindow, ReviewPeriod, ReviewRecord};
use review_engine::service::ReviewCycleService;
use review_engine::storage::{InMemoryStore, ReviewStore, StorageError};

// =============================================================================
// Test Helpers
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn router_on(store: Arc<dyn ReviewStore>, today: NaiveDate) -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let service = ReviewCycleService::new(
        store,
        Arc::new(FixedClock(today)),
        config.rules().clone(),
    );
    create_router(AppState::new(service))
}

fn fixture_router(today: NaiveDate) -> Router {
    let store = InMemoryStore::from_yaml("./config/default/fixture.yaml")
        .expect("Failed to load fixture");
    router_on(Arc::new(store), today)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post_eligibility(router: Router, ids: &[&str]) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/eligibility")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "employee_ids": ids }).to_string()))
            .unwrap(),
    )
    .await
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

fn decimal(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

fn row_names(rows: &Value) -> Vec<String> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

struct OfflineStore;

impl ReviewStore for OfflineStore {
    fn list_periods(&self) -> Result<Vec<ReviewPeriod>, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    fn list_employees(&self, _ids: &[String]) -> Result<Vec<Employee>, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    fn find_employee(&self, _id: &str) -> Result<Option<Employee>, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    fn list_review_records(
        &self,
        _window: &ReportWindow,
    ) -> Result<Vec<ReviewRecord>, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }
}

// =============================================================================
// Active period
// =============================================================================

#[tokio::test]
async fn test_active_period_within_grace_window() {
    let (status, body) = get(fixture_router(date(2025, 2, 15)), "/periods/active").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluated_on"], "2025-02-15");
    assert_eq!(body["active"]["period"]["year"], 2024);
    assert_eq!(body["active"]["selection"], "grace_window");
    assert_eq!(body["active"]["window_start"], "2024-10-01");
    assert_eq!(body["active"]["window_end"], "2025-02-28");
    assert_eq!(body["active"]["switchover_date"], "2025-08-01");
    assert_eq!(body["active"]["cutoff_date"], "2024-10-01");
    assert_eq!(body["active"]["is_currently_open"], true);
}

#[tokio::test]
async fn test_active_period_after_switchover() {
    let (_, body) = get(fixture_router(date(2025, 8, 2)), "/periods/active").await;

    assert_eq!(body["active"]["period"]["year"], 2025);
    // Selected, but the October window has not opened yet.
    assert_eq!(body["active"]["is_currently_open"], false);
}

#[tokio::test]
async fn test_active_period_falls_back_to_latest() {
    let (_, body) = get(fixture_router(date(2030, 1, 1)), "/periods/active").await;

    assert_eq!(body["active"]["period"]["year"], 2025);
    assert_eq!(body["active"]["selection"], "latest_fallback");
}

#[tokio::test]
async fn test_active_period_with_empty_catalog() {
    let router = router_on(Arc::new(InMemoryStore::default()), date(2025, 2, 15));
    let (status, body) = get(router, "/periods/active").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["active"].is_null());
}

// =============================================================================
// Periods
// =============================================================================

#[tokio::test]
async fn test_list_periods_with_windows() {
    let (status, body) = get(fixture_router(date(2025, 2, 15)), "/periods").await;

    assert_eq!(status, StatusCode::OK);
    let periods = body.as_array().unwrap();
    assert_eq!(periods.len(), 3);
    assert_eq!(periods[0]["year"], 2023);
    // February 2024 is a leap month.
    assert_eq!(periods[0]["window_end"], "2024-02-29");
}

#[tokio::test]
async fn test_periods_seeded_from_config() {
    let (rules, periods) = ConfigLoader::load("./config/default")
        .expect("Failed to load config")
        .into_parts();
    let service = ReviewCycleService::new(
        Arc::new(InMemoryStore::default().with_periods(periods)),
        Arc::new(FixedClock(date(2024, 8, 2))),
        rules,
    );
    let router = create_router(AppState::new(service));

    let (status, body) = get(router, "/periods/active").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"]["period"]["year"], 2024);
    assert_eq!(body["active"]["is_currently_open"], false);
}

#[tokio::test]
async fn test_period_for_year() {
    let (status, body) = get(fixture_router(date(2025, 2, 15)), "/periods/2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start_month"], 10);
    assert_eq!(body["window_end"], "2025-02-28");
}

#[tokio::test]
async fn test_unknown_period_returns_404() {
    let (status, body) = get(fixture_router(date(2025, 2, 15)), "/periods/1999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PERIOD_NOT_FOUND");
}

// =============================================================================
// Eligibility
// =============================================================================

#[tokio::test]
async fn test_bulk_eligibility() {
    let router = fixture_router(date(2025, 2, 15));
    let (status, body) = post_eligibility(
        router,
        &["emp_001", "emp_002", "emp_003", "emp_004", "emp_005", "unknown"],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_year"], 2024);
    assert_eq!(body["cutoff_date"], "2024-10-01");
    assert_eq!(ids(&body["eligible"]), vec!["emp_001", "emp_002", "emp_005"]);
    assert_eq!(ids(&body["ineligible"]), vec!["emp_003"]);
}

#[tokio::test]
async fn test_single_eligibility_matches_bulk() {
    for (id, expected) in [
        ("emp_002", "eligible"),
        ("emp_003", "too_new"),
        ("emp_004", "archived"),
        ("emp_005", "eligible"),
    ] {
        let uri = format!("/employees/{}/eligibility", id);
        let (status, body) = get(fixture_router(date(2025, 2, 15)), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["eligibility"], expected, "employee {}", id);
        assert_eq!(body["cutoff_date"], "2024-10-01");
    }
}

#[tokio::test]
async fn test_unknown_employee_returns_404() {
    let (status, body) = get(
        fixture_router(date(2025, 2, 15)),
        "/employees/emp_999/eligibility",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_eligibility_without_periods_returns_conflict() {
    let router = router_on(Arc::new(InMemoryStore::default()), date(2025, 2, 15));
    let (status, body) = post_eligibility(router, &["emp_001"]).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "NO_ACTIVE_PERIOD");
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn test_report_for_active_period() {
    let (status, body) = get(fixture_router(date(2025, 2, 15)), "/reports/reviews").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["window"]["from"], "2024-10-01");
    assert_eq!(body["window"]["to"], "2025-02-28");

    // The archived employee's review is not reported.
    assert_eq!(body["overall"]["total"], 5);
    assert_eq!(body["overall"]["talent_reviews"], 1);
    assert_eq!(body["overall"]["satisfaction"]["zufrieden"], 2);
    assert_eq!(body["overall"]["satisfaction"]["grundsaetzlich_zufrieden"], 1);
    assert_eq!(body["overall"]["satisfaction"]["unzufrieden"], 2);

    let overall = &body["overall"];
    assert_eq!(decimal(&overall["talent_review_share"]), Decimal::new(20, 0));
    let shares = &overall["satisfaction"]["shares"];
    assert_eq!(decimal(&shares["zufrieden"]), Decimal::new(40, 0));
    assert_eq!(decimal(&shares["grundsaetzlich_zufrieden"]), Decimal::new(20, 0));
    assert_eq!(decimal(&shares["unzufrieden"]), Decimal::new(40, 0));
    let technik = &body["technik"];
    assert_eq!(decimal(&technik["talent_review_share"]), Decimal::new(50, 0));
    assert_eq!(
        decimal(&technik["satisfaction"]["shares"]["unzufrieden"]),
        Decimal::new(50, 0)
    );

    assert_eq!(body["technik"]["total"], 2);
    assert_eq!(body["cpo_qs"]["total"], 1);
    assert_eq!(body["produktion"]["total"], 1);
    assert_eq!(body["unbekannt"]["total"], 1);

    assert_eq!(
        row_names(&body["technik_rows"]),
        vec!["Anna Berger", "Tom Richter"]
    );
    assert_eq!(row_names(&body["cpo_qs_rows"]), vec!["Eva Schulz"]);

    let reasons: Vec<(String, u64)> = body["overall"]["reasons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["keyword"].as_str().unwrap().to_string(),
                r["count"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            ("arbeitsbedingungen".to_string(), 1),
            ("entwicklung".to_string(), 1),
            ("klima".to_string(), 1),
            ("persönlich".to_string(), 0),
        ]
    );
}

#[tokio::test]
async fn test_report_for_explicit_window() {
    let (status, body) = get(
        fixture_router(date(2025, 2, 15)),
        "/reports/reviews?from=2023-10-01&to=2024-02-29",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall"]["total"], 1);
    assert_eq!(row_names(&body["cpo_qs_rows"]), vec!["Sofia Hoffmann"]);
}

#[tokio::test]
async fn test_report_with_inverted_window_returns_400() {
    let (status, body) = get(
        fixture_router(date(2025, 2, 15)),
        "/reports/reviews?from=2025-03-01&to=2025-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REPORT_WINDOW");
}

// =============================================================================
// Storage failures
// =============================================================================

#[tokio::test]
async fn test_storage_failure_is_surfaced() {
    let router = router_on(Arc::new(OfflineStore), date(2025, 2, 15));

    for uri in ["/periods", "/periods/active", "/employees/emp_001/eligibility"] {
        let (status, body) = get(router.clone(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["code"], "STORAGE_ERROR", "{}", uri);
    }
}
