//! DailyNewsHungary source.
//!
//! The site runs a yearly "long weekends in Hungary" article that restates
//! the government decree in English, e.g.
//! "Saturday, 17 May 2025, is a working day; Friday, 2 May 2025, is a rest day".
//! It is used for weekend workdays only.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::SourceError;
use crate::models::{is_weekend, SourceCapabilities, SourceDescriptor, WorkDay, YearWindow};
use crate::source::text::{
    english_month, english_month_name, page_text, ymd, ENGLISH_MONTH_ALTERNATION,
};
use crate::source::{HolidaySource, PageFetcher};

const SOURCE_NAME: &str = "DailyNewsHungary";
const URL_TEMPLATE: &str =
    "https://dailynewshungary.com/long-weekends-in-hungary-in-{year}-revealed/";

const DEFAULT_REASON: &str = "Bridge day workday";

lazy_static! {
    static ref WORKING_DAY_PATTERNS: Vec<Regex> = [
        format!(
            r"(?i)saturday[,\s]+(\d{{1,2}})\s+({})\s+\d{{4}}[,\s]+(?:is\s+)?(?:a\s+)?working\s*day",
            ENGLISH_MONTH_ALTERNATION
        ),
        format!(
            r"(?i)(\d{{1,2}})(?:st|nd|rd|th)?\s+({})\s+\d{{4}}[,\s]+(?:is\s+)?(?:a\s+)?working\s*day",
            ENGLISH_MONTH_ALTERNATION
        ),
        r"(?i)saturday[,\s]+(\d{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sept|sep|oct|nov|dec)[,\s]+working\s*day"
            .to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid regex pattern"))
    .collect();
}

/// The rest day a workday compensates for, when the article pairs them.
fn find_rest_day(text: &str, workday: NaiveDate) -> Option<(String, Option<NaiveDate>)> {
    let pattern = format!(
        r"(?i){}\s+{}.*?working\s*day[;,]\s*(\w+day)[,\s]+(\d{{1,2}})\s+(\w+).*?rest\s*day",
        workday.day(),
        english_month_name(workday.month())
    );
    let caps = Regex::new(&pattern).ok()?.captures(text)?;
    let (day, month) = (&caps[2], &caps[3]);
    let reason = format!("Working day for {} {} bridge day", month, day);
    let related = english_month(month)
        .zip(day.parse().ok())
        .and_then(|(month, day)| ymd(workday.year(), month, day));
    Some((reason, related))
}

/// Extract weekend workdays for `year` from the article body.
pub fn parse_workdays(html: &str, year: i32) -> Vec<WorkDay> {
    let text = page_text(html);
    let mut workdays: Vec<WorkDay> = Vec::new();

    for regex in WORKING_DAY_PATTERNS.iter() {
        for caps in regex.captures_iter(&text) {
            let Some(date) = english_month(&caps[2])
                .zip(caps[1].parse().ok())
                .and_then(|(month, day)| ymd(year, month, day))
            else {
                continue;
            };
            if !is_weekend(date) || workdays.iter().any(|w| w.date == date) {
                continue;
            }
            let workday = match find_rest_day(&text, date) {
                Some((reason, Some(related))) => WorkDay::new(date, reason).compensating(related),
                Some((reason, None)) => WorkDay::new(date, reason),
                None => WorkDay::new(date, DEFAULT_REASON),
            };
            workdays.push(workday);
        }
    }

    workdays.sort_by_key(|w| w.date);
    workdays
}

/// dailynewshungary.com yearly long-weekend article. Workdays only.
pub struct DailyNewsHungarySource {
    fetcher: PageFetcher,
}

impl DailyNewsHungarySource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl HolidaySource for DailyNewsHungarySource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(
            SOURCE_NAME,
            YearWindow::new(-2, 2),
            SourceCapabilities::WORKDAYS_ONLY,
        )
    }

    fn url_for(&self, year: i32) -> String {
        URL_TEMPLATE.replace("{year}", &year.to_string())
    }

    async fn fetch_workdays(&self, year: i32) -> Result<Vec<WorkDay>, SourceError> {
        let html = self
            .fetcher
            .fetch_html(SOURCE_NAME, &self.url_for(year))
            .await?;
        Ok(parse_workdays(&html, year))
    }
}
