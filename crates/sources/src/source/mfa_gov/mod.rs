//! MFA.gov.hu source.
//!
//! The Hungarian embassy page in Almaty lists Hungarian and local holidays,
//! one per line:
//!
//! ```text
//! 2025. január 1. Új Év – pihenőnap
//! 2025. május 1. A munka ünnepe (4 napos hétvége)
//! 2025. december 24-28. Karácsony (5 napos hétvége)
//! ```
//!
//! Weekend workdays are not listed explicitly; a "4 napos hétvége" (four-day
//! weekend) note implies the Saturday swap that made it possible.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::SourceError;
use crate::models::{Holiday, SourceCapabilities, SourceDescriptor, WorkDay, YearWindow};
use crate::source::text::{
    hungarian_month, page_lines, translate, ymd, HUNGARIAN_MONTH_ALTERNATION,
};
use crate::source::{HolidaySource, PageFetcher};

const SOURCE_NAME: &str = "MFA.gov.hu (Official)";
const URL: &str = "https://almati.mfa.gov.hu/hu/hu-uennepnapok";

const HOLIDAY_NAMES_EN: &[(&str, &str)] = &[
    ("új év", "New Year's Day"),
    ("újév", "New Year's Day"),
    ("1848-as forradalom", "1848 Revolution Memorial Day"),
    ("nemzeti ünnep", "National Day"),
    ("nagypéntek", "Good Friday"),
    ("húsvéthétfő", "Easter Monday"),
    ("húsvét", "Easter Monday"),
    ("munka ünnepe", "Labour Day"),
    ("pünkösdhétfő", "Whit Monday"),
    ("pünkösd", "Whit Monday"),
    ("államalapítás", "St. Stephen's Day"),
    ("szent istván", "St. Stephen's Day"),
    ("1956-os forradalom", "1956 Revolution Memorial Day"),
    ("mindenszentek", "All Saints' Day"),
    ("karácsony", "Christmas"),
];

/// Local holidays of the host country, listed on the same page.
const FOREIGN_MARKERS: &[&str] = &["kazahsztán", "kazah", "tádzsik"];

/// Long-weekend notes and the Saturday workday each implies.
const LONG_WEEKEND_SWAPS: &[(&str, u32, u32, &str)] = &[
    (r"május\s*1.*?4\s*napos\s*hétvége", 5, 17, "Bridge day for Labour Day"),
    (r"október\s*23.*?4\s*napos\s*hétvége", 10, 18, "Bridge day for October 23"),
    (r"karácsony.*?5\s*napos\s*hétvége", 12, 13, "Bridge day for Christmas Eve"),
];

lazy_static! {
    static ref HOLIDAY_LINE: Regex = Regex::new(&format!(
        r"(?i)^(\d{{4}})\.\s*({})\.?\s*(\d{{1,2}})(?:-\d{{1,2}})?\.?\s+(.+?)(?:\s*–\s*pihenőnap|\s*\(\d+\s*napos|\s*$)",
        HUNGARIAN_MONTH_ALTERNATION
    ))
    .expect("Invalid regex pattern");

    static ref CHRISTMAS_RANGE: Regex =
        Regex::new(r"(\d{4})\.\s*december\.?\s*(\d{1,2})-(\d{1,2})\.?\s+[Kk]arácsony")
            .expect("Invalid regex pattern");

    static ref SWAP_PATTERNS: Vec<(Regex, u32, u32, &'static str)> = LONG_WEEKEND_SWAPS
        .iter()
        .map(|(pattern, month, day, reason)| {
            let regex = Regex::new(&format!("(?i){}", pattern)).expect("Invalid regex pattern");
            (regex, *month, *day, *reason)
        })
        .collect();
}

fn is_foreign(name: &str) -> bool {
    let lower = name.to_lowercase();
    FOREIGN_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Extract Hungarian holidays for `year` from the page body.
///
/// A "december 24-28. Karácsony" range adds Christmas Day and the second day
/// of Christmas.
pub fn parse_holidays(html: &str, year: i32) -> Vec<Holiday> {
    let lines = page_lines(html);
    let mut holidays: Vec<Holiday> = Vec::new();

    for line in &lines {
        let Some(caps) = HOLIDAY_LINE.captures(line) else {
            continue;
        };
        if caps[1].parse::<i32>().ok() != Some(year) {
            continue;
        }
        let Some(month) = hungarian_month(&caps[2]) else {
            continue;
        };
        let Some(date) = caps[3].parse().ok().and_then(|day| ymd(year, month, day)) else {
            continue;
        };

        let name = caps[4].trim();
        if name.is_empty() || is_foreign(name) {
            continue;
        }
        if holidays.iter().any(|h| h.date == date) {
            continue;
        }
        holidays.push(Holiday {
            date,
            name: name.to_string(),
            name_en: Some(translate(name, HOLIDAY_NAMES_EN)),
            is_national: true,
        });
    }

    let has_christmas_range = lines.iter().any(|line| {
        CHRISTMAS_RANGE
            .captures(line)
            .is_some_and(|caps| caps[1].parse::<i32>().ok() == Some(year))
    });
    if has_christmas_range {
        let extra = [
            (25, "Karácsony", "Christmas Day"),
            (26, "Karácsony másnapja", "Second Day of Christmas"),
        ];
        for (day, name, name_en) in extra {
            let Some(date) = ymd(year, 12, day) else {
                continue;
            };
            if !holidays.iter().any(|h| h.date == date) {
                holidays.push(Holiday::national(date, name, name_en));
            }
        }
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Infer Saturday workdays for `year` from long-weekend notes.
///
/// Only notes on lines dated in `year` count.
pub fn parse_workdays(html: &str, year: i32) -> Vec<WorkDay> {
    let prefix = format!("{}.", year);
    let lines: Vec<String> = page_lines(html)
        .into_iter()
        .filter(|line| line.starts_with(&prefix))
        .collect();
    let mut workdays: Vec<WorkDay> = SWAP_PATTERNS
        .iter()
        .filter(|(regex, ..)| lines.iter().any(|line| regex.is_match(line)))
        .filter_map(|(_, month, day, reason)| {
            let date = ymd(year, *month, *day)?;
            let workday = WorkDay::new(date, *reason);
            (workday.original_day == "Saturday").then_some(workday)
        })
        .collect();

    workdays.sort_by_key(|w| w.date);
    workdays
}

/// Official MFA holiday page. Covers the current year only.
pub struct MfaGovSource {
    fetcher: PageFetcher,
}

impl MfaGovSource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl HolidaySource for MfaGovSource {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const PAGE: &str = r#"<html><body><article>
        <h1>Magyarországi ünnepnapok</h1>
        <ul>
          <li>2025. január 1. Új Év – pihenőnap</li>
          <li>2025. március 15. 1848-as forradalom és szabadságharc ünnepe</li>
          <li>2025. március 21. Nauryz, Kazahsztán nemzeti ünnepe</li>
          <li>2025. május 1. A munka ünnepe (4 napos hétvége)</li>
          <li>2025. október 23. 1956-os forradalom ünnepe (4 napos hétvége)</li>
          <li>2025. december 24-28. Karácsony (5 napos hétvége)</li>
          <li>2024. december 25. Karácsony</li>
        </ul>
    </article></body></html>"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_holidays() {
        let holidays = parse_holidays(PAGE, 2025);
        let dates: Vec<_> = holidays.iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 1, 1),
                date(2025, 3, 15),
                date(2025, 5, 1),
                date(2025, 10, 23),
                date(2025, 12, 24),
                date(2025, 12, 25),
                date(2025, 12, 26),
            ]
        );

        assert_eq!(holidays[0].name, "Új Év");
        assert_eq!(holidays[0].name_en.as_deref(), Some("New Year's Day"));
        assert_eq!(holidays[2].name, "A munka ünnepe");
        assert_eq!(holidays[2].name_en.as_deref(), Some("Labour Day"));
        assert_eq!(holidays[6].name, "Karácsony másnapja");
        assert!(holidays.iter().all(|h| h.is_national));
    }

    #[test]
    fn test_foreign_holidays_are_skipped() {
        let holidays = parse_holidays(PAGE, 2025);
        assert!(!holidays.iter().any(|h| h.date == date(2025, 3, 21)));
    }

    #[test]
    fn test_parse_workdays_from_long_weekends() {
        let workdays = parse_workdays(PAGE, 2025);
        let dates: Vec<_> = workdays.iter().map(|w| w.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 5, 17), date(2025, 10, 18), date(2025, 12, 13)]
        );
        assert_eq!(workdays[0].reason.as_deref(), Some("Bridge day for Labour Day"));
    }

    #[test]
    fn test_notes_of_other_years_are_ignored() {
        assert!(parse_workdays(PAGE, 2027).is_empty());
    }

    #[test]
    fn test_swap_dates_off_saturday_are_dropped() {
        // 2026-05-17 is a Sunday, 2026-10-18 a Sunday, 2026-12-13 a Sunday
        let page = PAGE.replace("2025.", "2026.");
        assert!(parse_workdays(&page, 2026).is_empty());
    }
}
