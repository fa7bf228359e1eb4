//! Text helpers shared by the HTML sources.
//!
//! Page bodies are flattened to text the way a browser's "select all, copy"
//! would: `page_text` concatenates every visible text node, `page_lines`
//! splits on text-node boundaries and drops blank lines. Script and style
//! contents are skipped.

use chrono::NaiveDate;
use scraper::{Html, Node};

/// Hungarian month names and their common abbreviations, accent-free
/// spellings included.
const HUNGARIAN_MONTHS: &[(&str, u32)] = &[
    ("január", 1),
    ("januar", 1),
    ("jan", 1),
    ("február", 2),
    ("februar", 2),
    ("feb", 2),
    ("március", 3),
    ("marcius", 3),
    ("márc", 3),
    ("már", 3),
    ("marc", 3),
    ("április", 4),
    ("aprilis", 4),
    ("ápr", 4),
    ("apr", 4),
    ("május", 5),
    ("majus", 5),
    ("máj", 5),
    ("maj", 5),
    ("június", 6),
    ("junius", 6),
    ("jún", 6),
    ("jun", 6),
    ("július", 7),
    ("julius", 7),
    ("júl", 7),
    ("jul", 7),
    ("augusztus", 8),
    ("aug", 8),
    ("szeptember", 9),
    ("szept", 9),
    ("sep", 9),
    ("október", 10),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Regex alternation of full Hungarian month names.
pub const HUNGARIAN_MONTH_ALTERNATION: &str =
    "január|február|március|április|május|június|július|augusztus|szeptember|október|november|december";

/// Regex alternation of Hungarian weekday names.
pub const HUNGARIAN_WEEKDAY_ALTERNATION: &str =
    "hétfő|kedd|szerda|csütörtök|péntek|szombat|vasárnap";

/// Regex alternation of full English month names.
pub const ENGLISH_MONTH_ALTERNATION: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";

const ENGLISH_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month number for a Hungarian month name or abbreviation.
pub fn hungarian_month(name: &str) -> Option<u32> {
    let key = name.trim().trim_end_matches('.').to_lowercase();
    HUNGARIAN_MONTHS
        .iter()
        .find(|(month, _)| *month == key)
        .map(|(_, number)| *number)
}

/// Month number for an English month name, matched on its first three letters.
pub fn english_month(name: &str) -> Option<u32> {
    let key: String = name.trim().to_lowercase().chars().take(3).collect();
    if key.len() < 3 {
        return None;
    }
    ENGLISH_MONTHS
        .iter()
        .position(|month| month.starts_with(&key))
        .map(|index| index as u32 + 1)
}

/// Full lowercase English month name.
pub fn english_month_name(month: u32) -> &'static str {
    ENGLISH_MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// A calendar date, or `None` for impossible combinations like 31 April.
pub fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First translation whose Hungarian key occurs in `name`, else `name` itself.
pub fn translate(name: &str, table: &[(&str, &str)]) -> String {
    let lower = name.to_lowercase();
    table
        .iter()
        .find(|(hungarian, _)| lower.contains(hungarian))
        .map(|(_, english)| english.to_string())
        .unwrap_or_else(|| name.to_string())
}

fn visible_text_nodes(document: &Html) -> impl Iterator<Item = &str> {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(|parent| match parent.value() {
                    Node::Element(element) => Some(matches!(element.name(), "script" | "style")),
                    _ => None,
                })
                .unwrap_or(false);
            if hidden {
                None
            } else {
                Some(&**text)
            }
        })
}

/// All visible text of the page, concatenated.
pub fn page_text(html: &str) -> String {
    let document = Html::parse_document(html);
    visible_text_nodes(&document).collect()
}

/// Visible text split into trimmed, non-empty lines.
///
/// Every text node boundary counts as a line break.
pub fn page_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    visible_text_nodes(&document)
        .flat_map(str::lines)
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}
