use std::sync::Arc;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        ApiInfo, DateCheckResponse, Endpoints, HealthResponse, Holiday, HolidayResponse,
        MessageResponse, SourceInfo, WorkDay,
    },
};
use axum::{extract::State, http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod health;
pub mod holidays;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::health,
        holidays::get_holidays,
        holidays::get_holidays_by_year,
        holidays::get_holidays_only,
        holidays::get_workdays,
        holidays::get_workdays_by_year,
        holidays::check_date,
        holidays::clear_cache,
    ),
    components(schemas(
        Holiday,
        WorkDay,
        SourceInfo,
        HolidayResponse,
        DateCheckResponse,
        HealthResponse,
        MessageResponse,
    )),
    tags((name = "hungarian-holidays"))
)]
pub struct ApiDoc;

async fn root(State(state): State<Arc<AppState>>) -> Json<ApiInfo> {
    Json(ApiInfo {
        name: "Hungarian Holidays API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "REST API for Hungarian public holidays and weekend workdays".to_string(),
        endpoints: Endpoints {
            holidays: "/api/v1/holidays".to_string(),
            holidays_by_year: "/api/v1/holidays/{year}".to_string(),
            holidays_only: "/api/v1/holidays-only".to_string(),
            workdays: "/api/v1/workdays".to_string(),
            workdays_by_year: "/api/v1/workdays/{year}".to_string(),
            check_date: "/api/v1/check/{date}".to_string(),
            documentation: "/api/v1/openapi.json".to_string(),
        },
        current_year: state.holiday_service.current_year(),
    })
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(holidays::router())
        .merge(health::router())
        .route("/openapi.json", get(|| async { Json(openapi) }));

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
