//! SzakmaiKamara.hu source.
//!
//! The chamber's article is free-form prose plus a summary table, so both
//! holidays and workdays are found with patterns over the full page text:
//!
//! - `május 1., péntek` - a statutory holiday
//! - `december 25., péntek és december 26., szombat` - two holidays at once
//! - `2026. január 2., péntek pihenőnap` - a bridge day
//! - `2026. január 10. szombat munkanap` - a Saturday workday
//! - `január 10-én, augusztus 8-án és december 12-én` - Saturday workdays in prose

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::errors::SourceError;
use crate::models::{Holiday, SourceCapabilities, SourceDescriptor, WorkDay, YearWindow};
use crate::source::text::{
    hungarian_month, page_text, ymd, HUNGARIAN_MONTH_ALTERNATION, HUNGARIAN_WEEKDAY_ALTERNATION,
};
use crate::source::{HolidaySource, PageFetcher};

const SOURCE_NAME: &str = "SzakmaiKamara.hu";
const URL: &str = "https://szakmaikamara.hu/munkaszuneti-napok/";

fn pattern(template: &str) -> Regex {
    let source = template
        .replace("{months}", HUNGARIAN_MONTH_ALTERNATION)
        .replace("{days}", HUNGARIAN_WEEKDAY_ALTERNATION);
    Regex::new(&format!("(?i){}", source)).expect("Invalid regex pattern")
}

lazy_static! {
    static ref SATURDAY_WORKDAY: Regex =
        pattern(r"({months})\s+(\d{1,2})[\.,]{0,2}\s*szombat.*?munkanap");

    static ref SINGLE_DAY: Regex = pattern(r"({months})\s+(\d{1,2})[\.,]{1,2}\s*({days})");

    static ref TWO_DAYS: Regex = pattern(
        r"({months})\s+(\d{1,2})[\.,]{0,2}\s*(?:{days})?\s+és\s+({months})\s+(\d{1,2})[\.,]{0,2}\s*(?:{days})?"
    );

    static ref REST_DAY: Regex =
        pattern(r"(\d{4})\.\s*({months})\s+(\d{1,2})[\.,]?\s*,?\s*(?:{days})?\s*pihenőnap");

    static ref DATED_WORKDAY: Regex =
        pattern(r"(\d{4})\.\s*({months})\s+(\d{1,2})[\.,]?\s*,?\s*szombat\s+munkanap");

    static ref INLINE_WORKDAY: Regex = pattern(r"({months})\s+(\d{1,2})-[éáa]n");

    static ref TABLE_WORKDAY: Regex =
        pattern(r"({months})\s+(\d{1,2})[\.,]{0,2}\s*szombat.*?(?:munkanap|áthelyezett)");
}

/// Date from a month-name group and a day group, in `year`.
fn capture_date(
    caps: &Captures,
    year: i32,
    month_group: usize,
    day_group: usize,
) -> Option<NaiveDate> {
    let month = hungarian_month(caps.get(month_group)?.as_str())?;
    let day = caps.get(day_group)?.as_str().parse().ok()?;
    ymd(year, month, day)
}

fn year_matches(caps: &Captures, year: i32) -> bool {
    caps[1].parse::<i32>().ok() == Some(year)
}

/// The next `chars` characters after byte offset `end`, lowercased.
fn context_after(text: &str, end: usize, chars: usize) -> String {
    text[end..].chars().take(chars).collect::<String>().to_lowercase()
}

fn holiday_name(date: NaiveDate) -> String {
    let name = match (date.month(), date.day()) {
        (1, 1) => "New Year's Day",
        (3, 15) => "1848 Revolution Memorial Day",
        (5, 1) => "Labour Day",
        (5, 2) => "Bridge Day (Labour Day)",
        (8, 20) => "St. Stephen's Day",
        (10, 23) => "1956 Revolution Memorial Day",
        (10, 24) => "Bridge Day (October Revolution)",
        (11, 1) => "All Saints' Day",
        (12, 24) => "Christmas Eve",
        (12, 25) => "Christmas Day",
        (12, 26) => "Second Day of Christmas",
        (12, 27) | (12, 28) => "Christmas Holiday",
        (4, _) => match date.weekday() {
            Weekday::Fri => "Good Friday",
            Weekday::Sat => "Easter Saturday",
            Weekday::Sun => "Easter Sunday",
            Weekday::Mon => "Easter Monday",
            _ => "",
        },
        (5, _) | (6, _) => match date.weekday() {
            Weekday::Sat => "Whit Saturday",
            Weekday::Sun => "Whit Sunday",
            Weekday::Mon => "Whit Monday",
            _ => "",
        },
        _ => "",
    };
    if name.is_empty() {
        format!("Holiday ({})", date.format("%B %d"))
    } else {
        name.to_string()
    }
}

fn bridge_day_name(date: NaiveDate) -> String {
    match (date.month(), date.day()) {
        (1, 2) => "Bridge Day (New Year)".to_string(),
        (8, 21) => "Bridge Day (St. Stephen's Day)".to_string(),
        (12, 24) => "Christmas Eve (Bridge Day)".to_string(),
        _ => format!("Bridge Day ({})", date.format("%B %d")),
    }
}

fn workday_reason(date: NaiveDate) -> &'static str {
    match date.month() {
        1 => "Bridge day for New Year (January 2)",
        5 => "Bridge day for Labour Day (May 2)",
        8 => "Bridge day for St. Stephen's Day (August 21)",
        10 => "Bridge day for October 23 Revolution Day",
        12 => "Bridge day for Christmas Eve (December 24)",
        _ => "Transferred workday",
    }
}

/// Extract holidays and bridge days for `year` from the page body.
///
/// Saturdays that the page marks as workdays are never reported as holidays.
pub fn parse_holidays(html: &str, year: i32) -> Vec<Holiday> {
    let text = page_text(html);
    let mut seen: HashSet<NaiveDate> = HashSet::new();
    let mut holidays: Vec<Holiday> = Vec::new();

    let saturday_workdays: HashSet<NaiveDate> = SATURDAY_WORKDAY
        .captures_iter(&text)
        .filter_map(|caps| capture_date(&caps, year, 1, 2))
        .collect();

    for caps in SINGLE_DAY.captures_iter(&text) {
        let Some(date) = capture_date(&caps, year, 1, 2) else {
            continue;
        };
        if saturday_workdays.contains(&date) {
            continue;
        }
        let end = caps.get(0).map_or(0, |m| m.end());
        let is_saturday = caps[3].to_lowercase() == "szombat";
        if is_saturday && context_after(&text, end, 50).contains("munkanap") {
            continue;
        }
        // Bridge days are picked up below with their own names.
        if context_after(&text, end, 30).contains("pihenőnap") {
            continue;
        }
        if seen.insert(date) {
            let name = holiday_name(date);
            holidays.push(Holiday {
                date,
                name_en: Some(name.clone()),
                name,
                is_national: true,
            });
        }
    }

    for caps in TWO_DAYS.captures_iter(&text) {
        for (month_group, day_group) in [(1, 2), (3, 4)] {
            let Some(date) = capture_date(&caps, year, month_group, day_group) else {
                continue;
            };
            if seen.insert(date) {
                let name = holiday_name(date);
                holidays.push(Holiday {
                    date,
                    name_en: Some(name.clone()),
                    name,
                    is_national: true,
                });
            }
        }
    }

    for caps in REST_DAY.captures_iter(&text) {
        if !year_matches(&caps, year) {
            continue;
        }
        let Some(date) = capture_date(&caps, year, 2, 3) else {
            continue;
        };
        if seen.insert(date) {
            let name = bridge_day_name(date);
            holidays.push(Holiday {
                date,
                name_en: Some(name.clone()),
                name,
                is_national: false,
            });
        }
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Extract Saturday workdays for `year` from the page body.
pub fn parse_workdays(html: &str, year: i32) -> Vec<WorkDay> {
    let text = page_text(html);
    let lower = text.to_lowercase();
    let mut seen: HashSet<NaiveDate> = HashSet::new();
    let mut workdays: Vec<WorkDay> = Vec::new();

    let mut candidates: Vec<NaiveDate> = DATED_WORKDAY
        .captures_iter(&text)
        .filter(|caps| year_matches(caps, year))
        .filter_map(|caps| capture_date(&caps, year, 2, 3))
        .collect();

    if lower.contains("dolgozni kell") || lower.contains("szombati") {
        candidates.extend(
            INLINE_WORKDAY
                .captures_iter(&text)
                .filter_map(|caps| capture_date(&caps, year, 1, 2)),
        );
    }

    candidates.extend(
        TABLE_WORKDAY
            .captures_iter(&text)
            .filter_map(|caps| capture_date(&caps, year, 1, 2)),
    );

    for date in candidates {
        if date.weekday() == Weekday::Sat && seen.insert(date) {
            workdays.push(WorkDay::new(date, workday_reason(date)));
        }
    }

    workdays.sort_by_key(|w| w.date);
    workdays
}

/// szakmaikamara.hu article. Covers the current year only.
pub struct SzakmaiKamaraSource {
    fetcher: PageFetcher,
}

impl SzakmaiKamaraSource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl HolidaySource for SzakmaiKamaraSource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(SOURCE_NAME, YearWindow::new(-1, 1), SourceCapabilities::BOTH)
    }

    fn url_for(&self, _year: i32) -> String {
        URL.to_string()
    }

    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, SourceError> {
        let html = self.fetcher.fetch_html(SOURCE_NAME, URL).await?;
        Ok(parse_holidays(&html, year))
    }

    async fn fetch_workdays(&self, year: i32) -> Result<Vec<WorkDay>, SourceError> {
        let html = self.fetcher.fetch_html(SOURCE_NAME, URL).await?;
        Ok(parse_workdays(&html, year))
    }
}
