use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use hungarian_holidays_core as core_holidays;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub name_en: Option<String>,
    pub is_national: bool,
}

impl From<core_holidays::Holiday> for Holiday {
    fn from(h: core_holidays::Holiday) -> Self {
        Self {
            date: h.date,
            name: h.name,
            name_en: h.name_en,
            is_national: h.is_national,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct WorkDay {
    pub date: NaiveDate,
    /// Day of week, e.g. "Saturday"
    pub original_day: String,
    pub reason: Option<String>,
    pub related_holiday: Option<NaiveDate>,
}

impl From<core_holidays::WorkDay> for WorkDay {
    fn from(w: core_holidays::WorkDay) -> Self {
        Self {
            date: w.date,
            original_day: w.original_day,
            reason: w.reason,
            related_holiday: w.related_holiday,
        }
    }
}

/// Where the holiday list came from.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SourceInfo {
    pub name: String,
    pub url: String,
    pub year_coverage: i32,
    pub scraped_at: String,
}

impl From<&core_holidays::Provenance> for SourceInfo {
    fn from(p: &core_holidays::Provenance) -> Self {
        Self {
            name: p.name.clone(),
            url: p.url.clone(),
            year_coverage: p.year,
            scraped_at: p.fetched_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HolidayResponse {
    pub year: i32,
    pub holidays: Vec<Holiday>,
    pub weekend_workdays: Vec<WorkDay>,
    pub source: SourceInfo,
    pub total_holidays: usize,
    pub total_weekend_workdays: usize,
}

impl From<&core_holidays::AggregationResult> for HolidayResponse {
    fn from(r: &core_holidays::AggregationResult) -> Self {
        Self {
            year: r.year,
            holidays: r.holidays.iter().cloned().map(Holiday::from).collect(),
            weekend_workdays: r.workdays.iter().cloned().map(WorkDay::from).collect(),
            source: SourceInfo::from(&r.provenance),
            total_holidays: r.total_holidays,
            total_weekend_workdays: r.total_workdays,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DateCheckResponse {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
    pub is_weekend: bool,
    pub is_weekend_workday: bool,
    pub is_working_day: bool,
}

impl From<core_holidays::DateCheck> for DateCheckResponse {
    fn from(c: core_holidays::DateCheck) -> Self {
        Self {
            date: c.date,
            day_of_week: c.day_of_week,
            is_holiday: c.is_holiday,
            holiday_name: c.holiday_name,
            is_weekend: c.is_weekend,
            is_weekend_workday: c.is_weekend_workday,
            is_working_day: c.is_working_day,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Endpoints {
    pub holidays: String,
    pub holidays_by_year: String,
    pub holidays_only: String,
    pub workdays: String,
    pub workdays_by_year: String,
    pub check_date: String,
    pub documentation: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Endpoints,
    pub current_year: i32,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct YearQuery {
    /// Defaults to the current year
    pub year: Option<i32>,
}
