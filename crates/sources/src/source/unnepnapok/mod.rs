//! Unnepnapok.com source.
//!
//! Two pages per year: one listing holidays, one listing Saturday workdays.
//! Entries are single lines such as
//!
//! ```text
//! 2026. január 1. – csütörtök – Újév
//! 2026. január 10. – szombat – munkanap (január 2. péntek helyett)
//! ```
//!
//! The site covers many years, so it makes a good last resort for years the
//! other sources no longer (or do not yet) publish.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::SourceError;
use crate::models::{is_weekend, Holiday, SourceCapabilities, SourceDescriptor, WorkDay, YearWindow};
use crate::source::text::{
    hungarian_month, page_lines, ymd, HUNGARIAN_MONTH_ALTERNATION, HUNGARIAN_WEEKDAY_ALTERNATION,
};
use crate::source::{HolidaySource, PageFetcher};

const SOURCE_NAME: &str = "Unnepnapok.com";
const HOLIDAYS_URL_TEMPLATE: &str =
    "https://unnepnapok.com/munkaszuneti-napok-unnepek-{year}-magyarorszag/";
const WORKDAYS_URL_TEMPLATE: &str = "https://unnepnapok.com/szombati-munkanapok-{year}/";

const DEFAULT_REASON: &str = "Áthelyezett munkanap";

lazy_static! {
    /// "2026. január 1. – csütörtök – Újév", the weekday being optional
    static ref DATE_LINE: Regex = Regex::new(&format!(
        r"(?i)^(\d{{4}})\.\s*(\w+)\.?\s+(\d{{1,2}})\.\s*[–—-]\s*(?:(?:{})\s*[–—-]\s*)?(.+)$",
        HUNGARIAN_WEEKDAY_ALTERNATION
    ))
    .expect("Invalid regex pattern");

    static ref PARENTHESIZED: Regex = Regex::new(r"\(([^)]+)\)").expect("Invalid regex pattern");

    static ref WORKDAY_PREFIX: Regex =
        Regex::new(r"(?i)^(?:szombati\s+munkanap|munkanap)[,\s–—-]*").expect("Invalid regex pattern");

    /// "január 2." inside a reason
    static ref REFERENCED_DATE: Regex = Regex::new(&format!(
        r"(?i)({})\s+(\d{{1,2}})\.",
        HUNGARIAN_MONTH_ALTERNATION
    ))
    .expect("Invalid regex pattern");
}

struct Entry {
    date: NaiveDate,
    title: String,
}

fn parse_line(line: &str, year: i32) -> Option<Entry> {
    let caps = DATE_LINE.captures(line)?;
    if caps[1].parse::<i32>().ok()? != year {
        return None;
    }
    let month = hungarian_month(&caps[2])?;
    let date = ymd(year, month, caps[3].parse().ok()?)?;
    Some(Entry {
        date,
        title: caps[4].trim().to_string(),
    })
}

fn entries(html: &str, year: i32) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    for entry in page_lines(html).iter().filter_map(|line| parse_line(line, year)) {
        if !entries.iter().any(|e| e.date == entry.date) {
            entries.push(entry);
        }
    }
    entries
}

/// Reason text for a workday title, e.g. "január 2. péntek helyett".
fn workday_reason(title: &str) -> String {
    let reason = if let Some(caps) = PARENTHESIZED.captures(title) {
        caps[1].trim().to_string()
    } else if let Some(index) = title.to_lowercase().find("helyett") {
        let before = title.get(..index).unwrap_or(title);
        let before = WORKDAY_PREFIX.replace(before.trim(), "");
        let before = before.trim();
        if before.is_empty() {
            String::new()
        } else {
            format!("{} helyett", before)
        }
    } else {
        title.to_string()
    };

    let reason = WORKDAY_PREFIX.replace(&reason, "").trim().to_string();
    if reason.is_empty() {
        DEFAULT_REASON.to_string()
    } else {
        reason
    }
}

/// The date a reason refers to, in the workday's year.
fn referenced_date(reason: &str, year: i32) -> Option<NaiveDate> {
    let caps = REFERENCED_DATE.captures(reason)?;
    ymd(year, hungarian_month(&caps[1])?, caps[2].parse().ok()?)
}

/// Extract holidays for `year` from the holidays page.
pub fn parse_holidays(html: &str, year: i32) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = entries(html, year)
        .into_iter()
        .filter(|entry| !entry.title.to_lowercase().contains("munkanap"))
        .map(|entry| Holiday {
            date: entry.date,
            name_en: Some(entry.title.clone()),
            name: entry.title,
            is_national: true,
        })
        .collect();

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Extract weekend workdays for `year` from the workdays page.
pub fn parse_workdays(html: &str, year: i32) -> Vec<WorkDay> {
    let mut workdays: Vec<WorkDay> = entries(html, year)
        .into_iter()
        .filter(|entry| is_weekend(entry.date))
        .map(|entry| {
            let reason = workday_reason(&entry.title);
            let related = referenced_date(&reason, entry.date.year());
            let workday = WorkDay::new(entry.date, reason);
            match related {
                Some(related) => workday.compensating(related),
                None => workday,
            }
        })
        .collect();

    workdays.sort_by_key(|w| w.date);
    workdays
}

/// unnepnapok.com. Covers a wide range of years.
pub struct UnnepnapokSource {
    fetcher: PageFetcher,
}

impl UnnepnapokSource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    fn workdays_url(year: i32) -> String {
        WORKDAYS_URL_TEMPLATE.replace("{year}", &year.to_string())
    }
}

#[async_trait]
impl HolidaySource for UnnepnapokSource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(SOURCE_NAME, YearWindow::new(-10, 10), SourceCapabilities::BOTH)
    }

    fn url_for(&self, year: i32) -> String {
        HOLIDAYS_URL_TEMPLATE.replace("{year}", &year.to_string())
    }

    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, SourceError> {
        let html = self
            .fetcher
            .fetch_html(SOURCE_NAME, &self.url_for(year))
            .await?;
        Ok(parse_holidays(&html, year))
    }

    async fn fetch_workdays(&self, year: i32) -> Result<Vec<WorkDay>, SourceError> {
        let html = self
            .fetcher
            .fetch_html(SOURCE_NAME, &Self::workdays_url(year))
            .await?;
        Ok(parse_workdays(&html, year))
    }
}
