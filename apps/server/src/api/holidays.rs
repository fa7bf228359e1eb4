use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{DateCheckResponse, Holiday, HolidayResponse, MessageResponse, WorkDay, YearQuery},
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use hungarian_holidays_core::{parse_date, validate_year};

fn requested_year(year: Option<i32>) -> ApiResult<Option<i32>> {
    Ok(year.map(validate_year).transpose()?)
}

#[utoipa::path(
    get,
    path = "/api/v1/holidays",
    params(YearQuery),
    responses(
        (status = 200, body = HolidayResponse),
        (status = 400, description = "Year outside 2000-2100")
    )
)]
pub async fn get_holidays(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Json<HolidayResponse>> {
    let year = requested_year(query.year)?;
    let result = state.holiday_service.get_aggregation(year).await;
    Ok(Json(HolidayResponse::from(result.as_ref())))
}

#[utoipa::path(
    get,
    path = "/api/v1/holidays/{year}",
    params(("year" = i32, Path, description = "Year between 2000 and 2100")),
    responses(
        (status = 200, body = HolidayResponse),
        (status = 400, description = "Year outside 2000-2100")
    )
)]
pub async fn get_holidays_by_year(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
) -> ApiResult<Json<HolidayResponse>> {
    let year = validate_year(year)?;
    let result = state.holiday_service.get_aggregation(Some(year)).await;
    Ok(Json(HolidayResponse::from(result.as_ref())))
}

#[utoipa::path(
    get,
    path = "/api/v1/holidays-only",
    params(YearQuery),
    responses((status = 200, body = [Holiday]))
)]
pub async fn get_holidays_only(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Json<Vec<Holiday>>> {
    let year = requested_year(query.year)?;
    let holidays = state.holiday_service.get_holidays(year).await;
    Ok(Json(holidays.into_iter().map(Holiday::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/workdays",
    params(YearQuery),
    responses((status = 200, body = [WorkDay]))
)]
pub async fn get_workdays(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Json<Vec<WorkDay>>> {
    let year = requested_year(query.year)?;
    let workdays = state.holiday_service.get_workdays(year).await;
    Ok(Json(workdays.into_iter().map(WorkDay::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/workdays/{year}",
    params(("year" = i32, Path, description = "Year between 2000 and 2100")),
    responses((status = 200, body = [WorkDay]))
)]
pub async fn get_workdays_by_year(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Vec<WorkDay>>> {
    let year = validate_year(year)?;
    let workdays = state.holiday_service.get_workdays(Some(year)).await;
    Ok(Json(workdays.into_iter().map(WorkDay::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/check/{date}",
    params(("date" = String, Path, description = "Date as YYYY-MM-DD")),
    responses(
        (status = 200, body = DateCheckResponse),
        (status = 400, description = "Unparsable date")
    )
)]
pub async fn check_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> ApiResult<Json<DateCheckResponse>> {
    let date = parse_date(&date)?;
    let check = state.holiday_service.check_date(date).await;
    Ok(Json(DateCheckResponse::from(check)))
}

/// Forces fresh fetches on the next request.
#[utoipa::path(post, path = "/api/v1/cache/clear", responses((status = 200, body = MessageResponse)))]
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.holiday_service.clear_cache();
    Json(MessageResponse {
        message: "Cache cleared successfully".to_string(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/holidays", get(get_holidays))
        .route("/holidays/{year}", get(get_holidays_by_year))
        .route("/holidays-only", get(get_holidays_only))
        .route("/workdays", get(get_workdays))
        .route("/workdays/{year}", get(get_workdays_by_year))
        .route("/check/{date}", get(check_date))
        .route("/cache/clear", post(clear_cache))
}
