//! PublicHolidays.hu source.
//!
//! The home page carries one section per year: an `<h2>2025 Public
//! Holidays</h2>` heading followed by a `Date | Day | Holiday` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::errors::SourceError;
use crate::models::{
    is_weekend, Holiday, SourceCapabilities, SourceDescriptor, WorkDay, YearWindow,
};
use crate::source::text::{english_month, page_text, ymd};
use crate::source::{HolidaySource, PageFetcher};

const SOURCE_NAME: &str = "PublicHolidays.hu";
const URL: &str = "https://publicholidays.hu/";

lazy_static! {
    static ref SECTION_OR_TABLE: Selector =
        Selector::parse("h2, table, [id]").expect("Invalid selector");
    static ref ROW: Selector = Selector::parse("tr").expect("Invalid selector");
    static ref CELL: Selector = Selector::parse("td").expect("Invalid selector");

    /// "1 Jan", "15 March"
    static ref DAY_MONTH: Regex = Regex::new(r"^(\d{1,2})\s+([A-Za-z]+)").expect("Invalid regex pattern");

    static ref WORKING_DAY: Regex = Regex::new(
        r"(?i)(\d{1,2})\s+(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)[^.\n]*?(?:working|work)\s*day"
    )
    .expect("Invalid regex pattern");
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn parse_day_month(text: &str, year: i32) -> Option<NaiveDate> {
    let caps = DAY_MONTH.captures(text.trim())?;
    let day = caps[1].parse().ok()?;
    let month = english_month(&caps[2])?;
    ymd(year, month, day)
}

fn is_year_heading(element: ElementRef, year: i32) -> bool {
    if element.value().id() == Some(format!("{}-public-holidays", year).as_str()) {
        return true;
    }
    if element.value().name() != "h2" {
        return false;
    }
    let text = element.text().collect::<String>().to_lowercase();
    let mut words = text.split_whitespace();
    words.next() == Some(year.to_string().as_str())
        && words.next() == Some("public")
        && words.next() == Some("holidays")
}

/// The first table that follows the year's section heading.
fn year_table(document: &Html, year: i32) -> Option<ElementRef<'_>> {
    let mut in_section = false;
    for element in document.select(&SECTION_OR_TABLE) {
        if !in_section {
            in_section = is_year_heading(element, year);
        } else if element.value().name() == "table" {
            return Some(element);
        }
    }
    None
}

/// Extract holidays for `year` from the year's table.
pub fn parse_holidays(html: &str, year: i32) -> Vec<Holiday> {
    let document = Html::parse_document(html);
    let Some(table) = year_table(&document, year) else {
        debug!("{}: no section for {}", SOURCE_NAME, year);
        return Vec::new();
    };

    let mut holidays: Vec<Holiday> = table
        .select(&ROW)
        .filter_map(|row| {
            let cells: Vec<String> = row.select(&CELL).map(cell_text).collect();
            if cells.len() < 3 {
                return None;
            }
            let (date_text, name) = (&cells[0], &cells[2]);
            // Footnote rows like "Visit jogtar.hu for ..."
            if name.is_empty() || date_text.to_lowercase().contains("visit") {
                return None;
            }
            let date = parse_day_month(date_text, year)?;
            Some(Holiday {
                date,
                name: name.clone(),
                name_en: Some(name.clone()),
                is_national: true,
            })
        })
        .collect();

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Best-effort scan for "... 17 May ... working day" mentions.
pub fn parse_workdays(html: &str, year: i32) -> Vec<WorkDay> {
    let text = page_text(html);
    let mut workdays: Vec<WorkDay> = Vec::new();

    for caps in WORKING_DAY.captures_iter(&text) {
        let Some(date) = parse_day_month(&format!("{} {}", &caps[1], &caps[2]), year) else {
            continue;
        };
        if is_weekend(date) && !workdays.iter().any(|w| w.date == date) {
            workdays.push(WorkDay::new(date, "Bridge day workday"));
        }
    }

    workdays.sort_by_key(|w| w.date);
    workdays
}

/// publicholidays.hu. One page covers several years.
pub struct PublicHolidaysSource {
    fetcher: PageFetcher,
}

impl PublicHolidaysSource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl HolidaySource for PublicHolidaysSource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(SOURCE_NAME, YearWindow::new(-2, 3), SourceCapabilities::BOTH)
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
