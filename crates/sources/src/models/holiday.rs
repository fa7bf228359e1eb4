//! Holiday and weekend workday records.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A Hungarian public holiday or bridge/rest day.
///
/// `is_national` is false for unofficial bridge days (áthelyezett pihenőnap)
/// that are days off but not statutory public holidays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    /// Local (usually Hungarian) name
    pub name: String,
    pub name_en: Option<String>,
    pub is_national: bool,
}

impl Holiday {
    /// A statutory public holiday.
    pub fn national(date: NaiveDate, name: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            name_en: Some(name_en.into()),
            is_national: true,
        }
    }

    /// A bridge/rest day that is not a statutory holiday.
    pub fn bridge(date: NaiveDate, name: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            name_en: Some(name_en.into()),
            is_national: false,
        }
    }
}

/// A Saturday or Sunday designated as a working day (munkanap-áthelyezés).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    pub date: NaiveDate,
    /// English weekday name of `date`, e.g. "Saturday"
    pub original_day: String,
    pub reason: Option<String>,
    /// The bridge day this workday compensates for
    pub related_holiday: Option<NaiveDate>,
}

impl WorkDay {
    /// Creates a workday, deriving `original_day` from the date.
    pub fn new(date: NaiveDate, reason: impl Into<String>) -> Self {
        Self {
            date,
            original_day: weekday_name(date.weekday()).to_string(),
            reason: Some(reason.into()),
            related_holiday: None,
        }
    }

    /// Sets the bridge day this workday compensates for.
    pub fn compensating(mut self, related_holiday: NaiveDate) -> Self {
        self.related_holiday = Some(related_holiday);
        self
    }

    /// Whether the date falls on a Saturday or Sunday.
    pub fn is_on_weekend(&self) -> bool {
        is_weekend(self.date)
    }
}

/// Whether the date is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
