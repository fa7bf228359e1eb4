use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use hungarian_holidays_server::{api::app_router, build_state_with_registry, config::Config};
use hungarian_holidays_sources::{
    Holiday, HolidaySource, SourceCapabilities, SourceDescriptor, SourceError, SourceRegistry,
    WorkDay, YearWindow,
};
use serde_json::Value;
use tower::ServiceExt;

/// Serves fixed month/day entries for any requested year; `None` fails.
struct FixedSource {
    name: &'static str,
    holidays: Option<Vec<(u32, u32, &'static str)>>,
    workdays: Vec<(u32, u32)>,
    calls: AtomicUsize,
}

impl FixedSource {
    fn new(
        name: &'static str,
        holidays: Option<Vec<(u32, u32, &'static str)>>,
        workdays: Vec<(u32, u32)>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            holidays,
            workdays,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl HolidaySource for FixedSource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(
            self.name,
            YearWindow::new(-200, 200),
            SourceCapabilities::BOTH,
        )
    }

    fn url_for(&self, year: i32) -> String {
        format!("https://{}.test/{}", self.name.to_lowercase(), year)
    }

    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let holidays = self.holidays.as_ref().ok_or(SourceError::HttpStatus {
            source_name: self.name.to_string(),
            status: 503,
        })?;
        Ok(holidays
            .iter()
            .filter_map(|(m, d, name)| {
                NaiveDate::from_ymd_opt(year, *m, *d).map(|date| Holiday::national(date, *name, *name))
            })
            .collect())
    }

    async fn fetch_workdays(&self, year: i32) -> Result<Vec<WorkDay>, SourceError> {
        Ok(self
            .workdays
            .iter()
            .filter_map(|(m, d)| NaiveDate::from_ymd_opt(year, *m, *d))
            .map(|date| WorkDay::new(date, "Áthelyezett munkanap"))
            .collect())
    }
}

fn app() -> (Router, Arc<FixedSource>) {
    let failing = FixedSource::new("S1", None, Vec::new());
    // 2025-05-17 is a Saturday
    let working = FixedSource::new("S2", Some(vec![(1, 1, "New Year")]), vec![(5, 17)]);
    let sources: Vec<Arc<dyn HolidaySource>> = vec![failing, working.clone()];
    let registry = SourceRegistry::new(sources.clone(), sources);

    let config = Config::default();
    let state = build_state_with_registry(&config, registry);
    (app_router(state, &config), working)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn holidays_by_year_uses_first_working_source() {
    let (app, _) = app();

    let (status, body) = send(&app, "GET", "/api/v1/holidays/2025").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2025);
    assert_eq!(body["holidays"][0]["date"], "2025-01-01");
    assert_eq!(body["holidays"][0]["name"], "New Year");
    assert_eq!(body["holidays"][0]["is_national"], true);
    assert_eq!(body["weekend_workdays"][0]["date"], "2025-05-17");
    assert_eq!(body["weekend_workdays"][0]["original_day"], "Saturday");
    assert_eq!(body["source"]["name"], "S2");
    assert_eq!(body["source"]["url"], "https://s2.test/2025");
    assert_eq!(body["source"]["year_coverage"], 2025);
    assert_eq!(body["total_holidays"], 1);
    assert_eq!(body["total_weekend_workdays"], 1);
}

#[tokio::test]
async fn holidays_query_matches_path_variant() {
    let (app, source) = app();

    let (status, body) = send(&app, "GET", "/api/v1/holidays?year=2026").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2026);

    // served from cache
    let (_, again) = send(&app, "GET", "/api/v1/holidays/2026").await;
    assert_eq!(again["holidays"], body["holidays"]);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn out_of_range_years_are_rejected() {
    let (app, _) = app();

    for uri in [
        "/api/v1/holidays/1999",
        "/api/v1/holidays/2101",
        "/api/v1/holidays?year=1999",
        "/api/v1/holidays-only?year=2101",
        "/api/v1/workdays/1850",
        "/api/v1/workdays?year=3000",
    ] {
        let (status, body) = send(&app, "GET", uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], 400, "{}", uri);
    }
}

#[tokio::test]
async fn projections_return_plain_lists() {
    let (app, _) = app();

    let (status, holidays) = send(&app, "GET", "/api/v1/holidays-only?year=2025").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(holidays.as_array().map(Vec::len), Some(1));

    let (status, workdays) = send(&app, "GET", "/api/v1/workdays/2025").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(workdays[0]["date"], "2025-05-17");

    let (status, workdays) = send(&app, "GET", "/api/v1/workdays?year=2025").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(workdays.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn check_date_reports_working_status() {
    let (app, _) = app();

    let (status, body) = send(&app, "GET", "/api/v1/check/2025-05-17").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["day_of_week"], "Saturday");
    assert_eq!(body["is_weekend"], true);
    assert_eq!(body["is_weekend_workday"], true);
    assert_eq!(body["is_working_day"], true);

    let (_, body) = send(&app, "GET", "/api/v1/check/2025-01-01").await;
    assert_eq!(body["is_holiday"], true);
    assert_eq!(body["holiday_name"], "New Year");
    assert_eq!(body["is_working_day"], false);

    let (status, _) = send(&app, "GET", "/api/v1/check/2025-13-40").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn clear_cache_forces_refetch() {
    let (app, source) = app();

    send(&app, "GET", "/api/v1/holidays/2025").await;
    let (status, body) = send(&app, "POST", "/api/v1/cache/clear").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cache cleared successfully");

    send(&app, "GET", "/api/v1/holidays/2025").await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn total_failure_returns_sentinel_source() {
    let failing = FixedSource::new("S1", None, Vec::new());
    let sources: Vec<Arc<dyn HolidaySource>> = vec![failing];
    let config = Config::default();
    let state = build_state_with_registry(&config, SourceRegistry::new(sources.clone(), sources));
    let app = app_router(state, &config);

    let (status, body) = send(&app, "GET", "/api/v1/holidays/2031").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holidays"], Value::Array(Vec::new()));
    assert_eq!(body["weekend_workdays"], Value::Array(Vec::new()));
    assert_eq!(body["source"]["name"], "None");
    assert_eq!(body["source"]["url"], "");
    assert_eq!(body["source"]["year_coverage"], 2031);
    assert_eq!(body["total_holidays"], 0);
}

#[tokio::test]
async fn health_and_info_endpoints() {
    let (app, _) = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = send(&app, "GET", "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Hungarian Holidays API");
    assert_eq!(body["endpoints"]["check_date"], "/api/v1/check/{date}");

    let (status, body) = send(&app, "GET", "/api/v1/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/holidays/{year}"].is_object());
}
