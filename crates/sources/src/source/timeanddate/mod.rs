//! TimeAndDate.com source.
//!
//! One page per year with a holiday table (`table#holidays-table`, older
//! layouts use `table.zebra`). Rows carry the date, weekday, name and type;
//! only "National holiday" / "Public holiday" rows are kept.

use async_trait::async_trait;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::errors::SourceError;
use crate::models::{Holiday, SourceCapabilities, SourceDescriptor, YearWindow};
use crate::source::text::{english_month, ymd};
use crate::source::{HolidaySource, PageFetcher};

const SOURCE_NAME: &str = "TimeAndDate.com";
const URL_TEMPLATE: &str = "https://www.timeanddate.com/holidays/hungary/{year}";

lazy_static! {
    static ref HOLIDAY_TABLE: Selector =
        Selector::parse("table#holidays-table").expect("Invalid selector");
    static ref ZEBRA_TABLE: Selector = Selector::parse("table.zebra").expect("Invalid selector");
    static ref ROW: Selector = Selector::parse("tr").expect("Invalid selector");
    static ref CELL: Selector = Selector::parse("td, th").expect("Invalid selector");
}

/// Parse "Mar 15" or "15 Mar" in `year`.
pub(crate) fn parse_date(text: &str, year: i32) -> Option<chrono::NaiveDate> {
    let mut parts = text.split_whitespace();
    let first = parts.next()?;
    let second = parts.next()?;
    let (day, month) = match first.parse::<u32>() {
        Ok(day) => (day, english_month(second)?),
        Err(_) => (second.trim_end_matches(',').parse().ok()?, english_month(first)?),
    };
    ymd(year, month, day)
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extract national/public holidays for `year` from the holiday table.
pub fn parse_holidays(html: &str, year: i32) -> Vec<Holiday> {
    let document = Html::parse_document(html);
    let Some(table) = document
        .select(&HOLIDAY_TABLE)
        .next()
        .or_else(|| document.select(&ZEBRA_TABLE).next())
    else {
        return Vec::new();
    };

    let mut holidays: Vec<Holiday> = Vec::new();
    for row in table.select(&ROW) {
        let cells: Vec<String> = row.select(&CELL).map(cell_text).collect();
        if cells.len() < 3 {
            continue;
        }
        let Some(date) = parse_date(&cells[0], year) else {
            continue;
        };
        let name = &cells[2];
        let kind = cells.get(3).unwrap_or(&cells[1]).to_lowercase();
        let is_national = kind.contains("national") || kind.contains("public");

        if name.is_empty() || !is_national || holidays.iter().any(|h| h.date == date) {
            continue;
        }
        holidays.push(Holiday {
            date,
            name: name.clone(),
            name_en: Some(name.clone()),
            is_national,
        });
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// timeanddate.com yearly holiday table. Publishes no workday information.
pub struct TimeAndDateSource {
    fetcher: PageFetcher,
}

impl TimeAndDateSource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl HolidaySource for TimeAndDateSource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(
            SOURCE_NAME,
            YearWindow::new(-5, 5),
            SourceCapabilities::HOLIDAYS_ONLY,
        )
    }

    fn url_for(&self, year: i32) -> String {
        URL_TEMPLATE.replace("{year}", &year.to_string())
    }

    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, SourceError> {
        let html = self
            .fetcher
            .fetch_html(SOURCE_NAME, &self.url_for(year))
            .await?;
        Ok(parse_holidays(&html, year))
    }
}
