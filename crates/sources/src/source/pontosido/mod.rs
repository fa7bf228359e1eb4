//! PontosIdo.com source.
//!
//! pontosido.com publishes one page listing the non-working days of several
//! years. Each entry is a date line followed by a description line:
//!
//! ```text
//! 2025. május 2. péntek
//! Áthelyezett pihenőnap (4 napos hétvége)
//! 2025. május 17. szombat
//! Áthelyezett munkanap
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::SourceError;
use crate::models::{is_weekend, Holiday, SourceCapabilities, SourceDescriptor, WorkDay, YearWindow};
use crate::source::text::{hungarian_month, page_lines, translate, ymd};
use crate::source::{HolidaySource, PageFetcher};

const SOURCE_NAME: &str = "PontosIdo.com";
const URL: &str = "https://www.pontosido.com/munkaszuneti-napok/";

const HOLIDAY_NAMES_EN: &[(&str, &str)] = &[
    ("újév", "New Year's Day"),
    ("új év", "New Year's Day"),
    ("1848-as forradalom", "1848 Revolution Memorial Day"),
    ("nemzeti ünnep", "National Day"),
    ("nagypéntek", "Good Friday"),
    ("húsvéthétfő", "Easter Monday"),
    ("húsvét vasárnap", "Easter Sunday"),
    ("húsvét hétfő", "Easter Monday"),
    ("húsvét", "Easter"),
    ("munka ünnepe", "Labour Day"),
    ("pünkösdhétfő", "Whit Monday"),
    ("pünkösd vasárnap", "Whit Sunday"),
    ("pünkösd hétfő", "Whit Monday"),
    ("pünkösd", "Whit"),
    ("államalapítás", "St. Stephen's Day"),
    ("szent istván", "St. Stephen's Day"),
    ("1956-os forradalom", "1956 Revolution Memorial Day"),
    ("mindenszentek", "All Saints' Day"),
    ("szenteste", "Christmas Eve"),
    ("karácsony", "Christmas"),
    ("szilveszter", "New Year's Eve"),
    ("áthelyezett pihenőnap", "Bridge Day"),
];

lazy_static! {
    /// "2025. december 24. szerda"
    static ref DATE_LINE: Regex =
        Regex::new(r"^(\d{4})\.\s*(\w+)\s+(\d{1,2})\.\s*(\w+)").expect("Invalid regex pattern");

    static ref LEADING_KIND: Regex =
        Regex::new(r"(?i)^(ünnepnap|pihenőnap),?\s*").expect("Invalid regex pattern");

    static ref LONG_WEEKEND: Regex =
        Regex::new(r"\(\d+\s*napos\s*hétvége\)").expect("Invalid regex pattern");
}

/// A date line together with the description line that follows it.
struct Entry<'a> {
    date: NaiveDate,
    description: &'a str,
}

fn entries(lines: &[String], year: i32) -> Vec<Entry<'_>> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let caps = DATE_LINE.captures(line)?;
            if caps[1].parse::<i32>().ok()? != year {
                return None;
            }
            let month = hungarian_month(&caps[2])?;
            let date = ymd(year, month, caps[3].parse().ok()?)?;
            let description = lines.get(i + 1).map(String::as_str).unwrap_or("");
            Some(Entry { date, description })
        })
        .collect()
}

fn clean_name(description: &str) -> String {
    let name = LONG_WEEKEND.replace_all(description, "");
    let name = LEADING_KIND.replace(name.trim(), "");
    let name = name.trim();
    if name.is_empty() {
        return "Pihenőnap".to_string();
    }
    match name.to_lowercase().strip_prefix("áthelyezett pihenőnap") {
        Some(rest) => format!("Áthelyezett pihenőnap{}", rest),
        None => name.to_string(),
    }
}

/// Extract holidays and rest days for `year` from the page body.
///
/// Statutory holidays ("Ünnepnap") are national; rest days ("pihenőnap")
/// are bridge days.
pub fn parse_holidays(html: &str, year: i32) -> Vec<Holiday> {
    let lines = page_lines(html);
    let mut holidays: Vec<Holiday> = Vec::new();

    for entry in entries(&lines, year) {
        let description = entry.description.to_lowercase();
        let is_holiday = description.contains("ünnepnap");
        let is_rest_day = description.contains("pihenőnap");
        let is_workday = description.contains("áthelyezett munkanap");

        if !(is_holiday || is_rest_day) || is_workday {
            continue;
        }
        if holidays.iter().any(|h| h.date == entry.date) {
            continue;
        }

        let name = clean_name(entry.description);
        let name_en = translate(&name, HOLIDAY_NAMES_EN);
        holidays.push(Holiday {
            date: entry.date,
            name,
            name_en: Some(name_en),
            is_national: is_holiday,
        });
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Extract transferred weekend workdays ("áthelyezett munkanap") for `year`.
pub fn parse_workdays(html: &str, year: i32) -> Vec<WorkDay> {
    let lines = page_lines(html);
    let mut workdays: Vec<WorkDay> = Vec::new();

    for entry in entries(&lines, year) {
        let description = entry.description.to_lowercase();
        if !(description.contains("munkanap") && description.contains("áthelyezett")) {
            continue;
        }
        if !is_weekend(entry.date) || workdays.iter().any(|w| w.date == entry.date) {
            continue;
        }
        workdays.push(WorkDay::new(
            entry.date,
            "Áthelyezett munkanap (Transferred workday)",
        ));
    }

    workdays.sort_by_key(|w| w.date);
    workdays
}

/// pontosido.com source. One page covers every year.
pub struct PontosIdoSource {
    fetcher: PageFetcher,
}

impl PontosIdoSource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl HolidaySource for PontosIdoSource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(SOURCE_NAME, YearWindow::new(-3, 1), SourceCapabilities::BOTH)
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
