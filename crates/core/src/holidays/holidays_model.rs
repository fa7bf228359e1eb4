use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::constants::{DATE_FORMAT, MAX_YEAR, MIN_YEAR};
use crate::errors::{Result, ValidationError};
use hungarian_holidays_sources::models::{is_weekend, weekday_name};
use hungarian_holidays_sources::{Holiday, Provenance, WorkDay};

/// Holidays and weekend workdays of one year, with the holiday provenance.
///
/// Immutable once assembled; the cache shares it behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AggregationResult {
    pub year: i32,
    pub holidays: Vec<Holiday>,
    pub workdays: Vec<WorkDay>,
    pub provenance: Provenance,
    pub total_holidays: usize,
    pub total_workdays: usize,
}

impl AggregationResult {
    /// Builds the result from resolved holidays and merged workdays.
    pub fn assemble(
        year: i32,
        holidays: Vec<Holiday>,
        provenance: Provenance,
        workdays: Vec<WorkDay>,
    ) -> Self {
        Self {
            year,
            total_holidays: holidays.len(),
            total_workdays: workdays.len(),
            holidays,
            workdays,
            provenance,
        }
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    pub fn workday_on(&self, date: NaiveDate) -> Option<&WorkDay> {
        self.workdays.iter().find(|w| w.date == date)
    }

    /// True when every source failed or came back empty.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty() && self.workdays.is_empty()
    }
}

/// Working-day status of a single date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateCheck {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
    pub is_weekend: bool,
    pub is_weekend_workday: bool,
    pub is_working_day: bool,
}

impl DateCheck {
    /// Evaluates `date` against the aggregation of its year.
    pub fn evaluate(date: NaiveDate, aggregation: &AggregationResult) -> Self {
        let holiday = aggregation.holiday_on(date);
        let is_holiday = holiday.is_some();
        let is_weekend = is_weekend(date);
        let is_weekend_workday = aggregation.workday_on(date).is_some();

        Self {
            date,
            day_of_week: weekday_name(date.weekday()).to_string(),
            is_holiday,
            holiday_name: holiday.map(|h| h.name.clone()),
            is_weekend,
            is_weekend_workday,
            is_working_day: (!is_weekend && !is_holiday) || is_weekend_workday,
        }
    }
}

/// Rejects years outside the supported range.
pub fn validate_year(year: i32) -> Result<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(ValidationError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        }
        .into())
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}
