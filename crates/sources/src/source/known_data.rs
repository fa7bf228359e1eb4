//! Static known-data fallback, composed as a source decorator.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{info, warn};

use crate::errors::SourceError;
use crate::models::{Holiday, SourceDescriptor, WorkDay};
use crate::source::HolidaySource;

/// Holidays and workdays known ahead of time, keyed by year.
#[derive(Clone, Debug, Default)]
pub struct KnownDataset {
    holidays: HashMap<i32, Vec<Holiday>>,
    workdays: HashMap<i32, Vec<WorkDay>>,
}

impl KnownDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(mut self, year: i32, holidays: Vec<Holiday>) -> Self {
        self.holidays.insert(year, holidays);
        self
    }

    pub fn with_workdays(mut self, year: i32, workdays: Vec<WorkDay>) -> Self {
        self.workdays.insert(year, workdays);
        self
    }

    /// Known holidays for `year`; empty when the year is not covered.
    pub fn holidays(&self, year: i32) -> &[Holiday] {
        self.holidays.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Known workdays for `year`; empty when the year is not covered.
    pub fn workdays(&self, year: i32) -> &[WorkDay] {
        self.workdays.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// What the decorator does when the inner fetch fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return the dataset entries for the year, if any.
    UseKnown,
    /// Pass the error through untouched.
    Propagate,
}

/// Records carrying a calendar date, so known entries can fill gaps.
trait Dated: Clone {
    fn date(&self) -> NaiveDate;
}

impl Dated for Holiday {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for WorkDay {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Wraps a source with a static dataset.
///
/// A successful inner result is completed with every dataset entry whose
/// date it lacks; scraped entries win on shared dates. An empty result thus
/// becomes the dataset. On failure the [`FailurePolicy`] decides between the
/// dataset and the error. Years the dataset does not cover pass through.
pub struct KnownDataSource<S> {
    inner: S,
    dataset: KnownDataset,
    on_failure: FailurePolicy,
}

impl<S: HolidaySource> KnownDataSource<S> {
    /// Gap-fills successful fetches and replaces failed ones.
    pub fn new(inner: S, dataset: KnownDataset) -> Self {
        Self {
            inner,
            dataset,
            on_failure: FailurePolicy::UseKnown,
        }
    }

    /// Gap-fills successful fetches only; failures stay failures.
    pub fn supplementing(inner: S, dataset: KnownDataset) -> Self {
        Self {
            inner,
            dataset,
            on_failure: FailurePolicy::Propagate,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.on_failure
    }

    fn complete<T: Dated>(
        &self,
        year: i32,
        kind: &str,
        result: Result<Vec<T>, SourceError>,
        known: &[T],
    ) -> Result<Vec<T>, SourceError> {
        match result {
            Ok(mut items) => {
                let missing: Vec<T> = known
                    .iter()
                    .filter(|k| !items.iter().any(|item| item.date() == k.date()))
                    .cloned()
                    .collect();
                if missing.is_empty() {
                    return Ok(items);
                }
                info!(
                    "{}: adding {} known {} missing from {} scraped for {}",
                    self.inner.name(),
                    missing.len(),
                    kind,
                    items.len(),
                    year
                );
                items.extend(missing);
                items.sort_by_key(Dated::date);
                Ok(items)
            }
            Err(e) => {
                if known.is_empty() || self.on_failure == FailurePolicy::Propagate {
                    return Err(e);
                }
                warn!(
                    "{}: {} fetch failed for {} ({}), using {} known entries",
                    self.inner.name(),
                    kind,
                    year,
                    e,
                    known.len()
                );
                let mut items = known.to_vec();
                items.sort_by_key(Dated::date);
                Ok(items)
            }
        }
    }
}

#[async_trait]
impl<S: HolidaySource> HolidaySource for KnownDataSource<S> {
    fn descriptor(&self) -> SourceDescriptor {
        self.inner.descriptor()
    }

    fn url_for(&self, year: i32) -> String {
        self.inner.url_for(year)
    }

    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, SourceError> {
        let result = self.inner.fetch_holidays(year).await;
        self.complete(year, "holidays", result, self.dataset.holidays(year))
    }

    async fn fetch_workdays(&self, year: i32) -> Result<Vec<WorkDay>, SourceError> {
        let result = self.inner.fetch_workdays(year).await;
        self.complete(year, "workdays", result, self.dataset.workdays(year))
    }
}

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The 2025 Hungarian calendar as published in the government decree.
///
/// Includes bridge days (is_national = false) and the three Saturday
/// workdays that compensate for them.
pub fn hungary_2025() -> KnownDataset {
    let holidays = vec![
        Holiday::national(d(2025, 1, 1), "Újév", "New Year's Day"),
        Holiday::national(
            d(2025, 3, 15),
            "1848-as forradalom ünnepe",
            "1848 Revolution Memorial Day",
        ),
        Holiday::national(d(2025, 4, 18), "Nagypéntek", "Good Friday"),
        Holiday::national(d(2025, 4, 20), "Húsvét vasárnap", "Easter Sunday"),
        Holiday::national(d(2025, 4, 21), "Húsvét hétfő", "Easter Monday"),
        Holiday::national(d(2025, 5, 1), "Munka ünnepe", "Labour Day"),
        Holiday::bridge(
            d(2025, 5, 2),
            "Áthelyezett pihenőnap",
            "Bridge Day (Labour Day)",
        ),
        Holiday::national(d(2025, 6, 8), "Pünkösd vasárnap", "Whit Sunday"),
        Holiday::national(d(2025, 6, 9), "Pünkösd hétfő", "Whit Monday"),
        Holiday::national(d(2025, 8, 20), "Szent István nap", "St. Stephen's Day"),
        Holiday::national(
            d(2025, 10, 23),
            "1956-os forradalom ünnepe",
            "1956 Revolution Memorial Day",
        ),
        Holiday::bridge(
            d(2025, 10, 24),
            "Áthelyezett pihenőnap",
            "Bridge Day (October Revolution)",
        ),
        Holiday::national(d(2025, 11, 1), "Mindenszentek", "All Saints' Day"),
        Holiday::bridge(d(2025, 12, 24), "Szenteste", "Christmas Eve"),
        Holiday::national(d(2025, 12, 25), "Karácsony", "Christmas Day"),
        Holiday::national(
            d(2025, 12, 26),
            "Karácsony másnapja",
            "Second Day of Christmas",
        ),
    ];

    KnownDataset::new()
        .with_holidays(2025, holidays)
        .with_workdays(2025, saturday_workdays_2025())
}

/// Only the 2025 bridge days and their Saturday workdays.
///
/// For sources that publish the statutory holidays reliably but miss the
/// rearranged rest days.
pub fn hungary_2025_bridge_days() -> KnownDataset {
    let holidays = vec![
        Holiday::bridge(
            d(2025, 5, 2),
            "Áthelyezett pihenőnap",
            "Bridge Day (Labour Day)",
        ),
        Holiday::bridge(
            d(2025, 10, 24),
            "Áthelyezett pihenőnap",
            "Bridge Day (October Revolution)",
        ),
        Holiday::bridge(
            d(2025, 12, 24),
            "Szenteste (Áthelyezett pihenőnap)",
            "Christmas Eve",
        ),
    ];

    KnownDataset::new()
        .with_holidays(2025, holidays)
        .with_workdays(2025, saturday_workdays_2025())
}

fn saturday_workdays_2025() -> Vec<WorkDay> {
    vec![
        WorkDay::new(d(2025, 5, 17), "Bridge day for Labour Day (May 2)")
            .compensating(d(2025, 5, 2)),
        WorkDay::new(d(2025, 10, 18), "Bridge day for October 23 Revolution Day")
            .compensating(d(2025, 10, 24)),
        WorkDay::new(d(2025, 12, 13), "Bridge day for Christmas Eve (December 24)")
            .compensating(d(2025, 12, 24)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SourceCapabilities, YearWindow};
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Fail,
        Empty,
        One,
    }

    struct StubSource {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl HolidaySource for StubSource {
        fn descriptor(&self) -> SourceDescriptor {
            SourceDescriptor::new("Stub", YearWindow::new(-1, 1), SourceCapabilities::BOTH)
        }

        fn url_for(&self, year: i32) -> String {
            format!("https://stub.example/{}", year)
        }

        async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Fail => Err(SourceError::Timeout {
                    source_name: "Stub".to_string(),
                }),
                Behavior::Empty => Ok(vec![]),
                Behavior::One => Ok(vec![Holiday::national(
                    d(year, 1, 1),
                    "Újév napja",
                    "New Year's Day",
                )]),
            }
        }

        async fn fetch_workdays(&self, _year: i32) -> Result<Vec<WorkDay>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Fail => Err(SourceError::parse("Stub", "layout changed")),
                _ => Ok(vec![]),
            }
        }
    }

    #[tokio::test]
    async fn test_partial_scrape_is_completed_from_dataset() {
        let source = KnownDataSource::new(StubSource::new(Behavior::One), hungary_2025());
        let holidays = source.fetch_holidays(2025).await.unwrap();

        assert_eq!(holidays.len(), 16);
        assert!(holidays.windows(2).all(|w| w[0].date < w[1].date));
        // The scraped entry wins on its date
        assert_eq!(holidays[0].date, d(2025, 1, 1));
        assert_eq!(holidays[0].name, "Újév napja");
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_uncovered_year_keeps_scraped_entries() {
        let source = KnownDataSource::new(StubSource::new(Behavior::One), hungary_2025());
        let holidays = source.fetch_holidays(2026).await.unwrap();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name, "Újév napja");
    }

    #[tokio::test]
    async fn test_supplementing_adds_bridge_days_only() {
        let source = KnownDataSource::supplementing(
            StubSource::new(Behavior::One),
            hungary_2025_bridge_days(),
        );
        assert_eq!(source.failure_policy(), FailurePolicy::Propagate);

        let holidays = source.fetch_holidays(2025).await.unwrap();
        let dates: Vec<_> = holidays.iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![d(2025, 1, 1), d(2025, 5, 2), d(2025, 10, 24), d(2025, 12, 24)]
        );
        assert_eq!(holidays.iter().filter(|h| !h.is_national).count(), 3);
    }

    #[tokio::test]
    async fn test_supplementing_propagates_failure() {
        let source = KnownDataSource::supplementing(
            StubSource::new(Behavior::Fail),
            hungary_2025_bridge_days(),
        );
        assert!(source.fetch_holidays(2025).await.is_err());
        assert!(source.fetch_workdays(2025).await.is_err());
    }

    #[tokio::test]
    async fn test_falls_back_on_error() {
        let source = KnownDataSource::new(StubSource::new(Behavior::Fail), hungary_2025());
        let holidays = source.fetch_holidays(2025).await.unwrap();
        assert_eq!(holidays.len(), 16);

        let workdays = source.fetch_workdays(2025).await.unwrap();
        assert_eq!(workdays.len(), 3);
        assert!(workdays.iter().all(|w| w.original_day == "Saturday"));
    }

    #[tokio::test]
    async fn test_falls_back_on_empty() {
        let source = KnownDataSource::new(StubSource::new(Behavior::Empty), hungary_2025());
        let workdays = source.fetch_workdays(2025).await.unwrap();
        assert_eq!(workdays[0].date, d(2025, 5, 17));
        assert_eq!(workdays[0].related_holiday, Some(d(2025, 5, 2)));
    }

    #[tokio::test]
    async fn test_uncovered_year_passes_through() {
        let source = KnownDataSource::new(StubSource::new(Behavior::Fail), hungary_2025());
        assert!(source.fetch_holidays(2026).await.is_err());

        let source = KnownDataSource::new(StubSource::new(Behavior::Empty), hungary_2025());
        assert!(source.fetch_holidays(2026).await.unwrap().is_empty());
    }

    #[test]
    fn test_decorator_keeps_descriptor() {
        let source = KnownDataSource::new(StubSource::new(Behavior::Empty), KnownDataset::new());
        assert_eq!(source.name(), "Stub");
        assert_eq!(source.url_for(2025), "https://stub.example/2025");
        assert!(source.supports(2026, 2025));
    }

    #[test]
    fn test_known_2025_calendar_is_consistent() {
        let dataset = hungary_2025();
        let holidays = dataset.holidays(2025);
        assert!(holidays.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(holidays.iter().filter(|h| !h.is_national).count(), 3);
        assert!(dataset.workdays(2025).iter().all(WorkDay::is_on_weekend));
        assert!(dataset.holidays(2024).is_empty());
    }
}
