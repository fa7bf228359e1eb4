//! OfficeHolidays.com source.
//!
//! One page per year with a `table.country-table` whose rows start with the
//! date and the holiday name.

use async_trait::async_trait;
use lazy_static::lazy_static;
use scraper::{Html, Selector};

use crate::errors::SourceError;
use crate::models::{Holiday, SourceCapabilities, SourceDescriptor, YearWindow};
use crate::source::timeanddate::parse_date;
use crate::source::{HolidaySource, PageFetcher};

const SOURCE_NAME: &str = "OfficeHolidays.com";
const URL_TEMPLATE: &str = "https://www.officeholidays.com/countries/hungary/{year}";

lazy_static! {
    static ref COUNTRY_TABLE: Selector =
        Selector::parse("table.country-table").expect("Invalid selector");
    static ref ANY_TABLE: Selector = Selector::parse("table").expect("Invalid selector");
    static ref ROW: Selector = Selector::parse("tr").expect("Invalid selector");
    static ref CELL: Selector = Selector::parse("td").expect("Invalid selector");
}

/// Extract holidays for `year` from the country table.
pub fn parse_holidays(html: &str, year: i32) -> Vec<Holiday> {
    let document = Html::parse_document(html);
    let Some(table) = document
        .select(&COUNTRY_TABLE)
        .next()
        .or_else(|| document.select(&ANY_TABLE).next())
    else {
        return Vec::new();
    };

    let mut holidays: Vec<Holiday> = Vec::new();
    for row in table.select(&ROW) {
        let cells: Vec<String> = row
            .select(&CELL)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();
        if cells.len() < 2 || cells[1].is_empty() {
            continue;
        }
        let Some(date) = parse_date(&cells[0], year) else {
            continue;
        };
        if holidays.iter().any(|h| h.date == date) {
            continue;
        }
        holidays.push(Holiday {
            date,
            name: cells[1].clone(),
            name_en: Some(cells[1].clone()),
            is_national: true,
        });
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// officeholidays.com yearly table. Publishes no workday information.
pub struct OfficeHolidaysSource {
    fetcher: PageFetcher,
}

impl OfficeHolidaysSource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl HolidaySource for OfficeHolidaysSource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(
            SOURCE_NAME,
            YearWindow::new(-3, 3),
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
