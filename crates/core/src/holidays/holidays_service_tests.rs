#[cfg(test)]
mod tests {
    use crate::holidays::{
        HolidayService, HolidayServiceConfig, HolidayServiceTrait, SourceRegistryOptions,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use hungarian_holidays_sources::{
        Holiday, HolidaySource, SourceCapabilities, SourceDescriptor, SourceError,
        SourceRegistry, WorkDay, YearWindow,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    // --- Mock source ---
    // `None` lists make the corresponding fetch fail with HTTP 503.
    struct MockSource {
        name: &'static str,
        window: YearWindow,
        holidays: Option<Vec<(u32, u32, &'static str)>>,
        workdays: Option<Vec<(u32, u32)>>,
        holiday_calls: AtomicUsize,
        workday_calls: AtomicUsize,
    }

    impl MockSource {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                window: YearWindow::new(-1, 1),
                holidays: Some(Vec::new()),
                workdays: Some(Vec::new()),
                holiday_calls: AtomicUsize::new(0),
                workday_calls: AtomicUsize::new(0),
            }
        }

        fn window(mut self, min_offset: i32, max_offset: i32) -> Self {
            self.window = YearWindow::new(min_offset, max_offset);
            self
        }

        fn holidays(mut self, holidays: &[(u32, u32, &'static str)]) -> Self {
            self.holidays = Some(holidays.to_vec());
            self
        }

        fn workdays(mut self, workdays: &[(u32, u32)]) -> Self {
            self.workdays = Some(workdays.to_vec());
            self
        }

        fn failing(mut self) -> Self {
            self.holidays = None;
            self.workdays = None;
            self
        }

        fn unavailable(&self) -> SourceError {
            SourceError::HttpStatus {
                source_name: self.name.to_string(),
                status: 503,
            }
        }
    }

    #[async_trait]
    impl HolidaySource for MockSource {
        fn descriptor(&self) -> SourceDescriptor {
            SourceDescriptor::new(self.name, self.window, SourceCapabilities::BOTH)
        }

        fn url_for(&self, year: i32) -> String {
            format!("https://{}.test/{}", self.name.to_lowercase(), year)
        }

        async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, SourceError> {
            self.holiday_calls.fetch_add(1, Ordering::SeqCst);
            let items = self.holidays.as_ref().ok_or_else(|| self.unavailable())?;
            Ok(items
                .iter()
                .filter_map(|(month, day, name)| {
                    NaiveDate::from_ymd_opt(year, *month, *day)
                        .map(|date| Holiday::national(date, *name, *name))
                })
                .collect())
        }

        async fn fetch_workdays(&self, year: i32) -> Result<Vec<WorkDay>, SourceError> {
            self.workday_calls.fetch_add(1, Ordering::SeqCst);
            let items = self.workdays.as_ref().ok_or_else(|| self.unavailable())?;
            Ok(items
                .iter()
                .filter_map(|(month, day)| NaiveDate::from_ymd_opt(year, *month, *day))
                .map(|date| WorkDay::new(date, "Áthelyezett munkanap"))
                .collect())
        }
    }

    fn year_2025() -> i32 {
        2025
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(sources: &[Arc<MockSource>]) -> HolidayService {
        let list: Vec<Arc<dyn HolidaySource>> = sources
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn HolidaySource>)
            .collect();
        let config = HolidayServiceConfig {
            source_timeout: Duration::from_secs(5),
            ..HolidayServiceConfig::default()
        };
        HolidayService::new(SourceRegistry::new(list.clone(), list), config).with_clock(year_2025)
    }

    #[tokio::test]
    async fn test_failed_primary_falls_through() {
        let s1 = Arc::new(MockSource::new("S1").failing());
        let s2 = Arc::new(
            MockSource::new("S2")
                .holidays(&[(1, 1, "New Year")])
                .workdays(&[(5, 17)]),
        );
        let service = service(&[s1, s2]);

        let result = service.get_aggregation(Some(2025)).await;

        assert_eq!(result.holidays.len(), 1);
        assert_eq!(result.holidays[0].name, "New Year");
        assert_eq!(result.provenance.name, "S2");
        assert_eq!(result.provenance.url, "https://s2.test/2025");
        assert_eq!(result.provenance.year, 2025);
        assert_eq!(result.total_workdays, 1);
        assert_eq!(result.workdays[0].original_day, "Saturday");
    }

    #[tokio::test]
    async fn test_resolution_stops_at_first_success() {
        let a = Arc::new(MockSource::new("A").holidays(&[(3, 15, "Nemzeti ünnep")]));
        let b = Arc::new(MockSource::new("B").holidays(&[(1, 1, "Újév")]));
        let service = service(&[a.clone(), b.clone()]);

        let holidays = service.get_holidays(Some(2025)).await;

        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].date, date(2025, 3, 15));
        assert_eq!(b.holiday_calls.load(Ordering::SeqCst), 0);
        // every workday source is consulted regardless
        assert_eq!(b.workday_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_workdays_fill_gaps_in_rank_order() {
        let a = Arc::new(MockSource::new("A").workdays(&[(5, 17)]));
        let b = Arc::new(MockSource::new("B").workdays(&[(5, 17), (10, 18), (10, 20)]));
        let service = service(&[a, b]);

        let workdays = service.get_workdays(Some(2025)).await;

        let dates: Vec<_> = workdays.iter().map(|w| w.date).collect();
        // 2025-10-20 is a Monday and is discarded
        assert_eq!(dates, vec![date(2025, 5, 17), date(2025, 10, 18)]);
    }

    #[tokio::test]
    async fn test_cache_idempotence_and_clear() {
        let source = Arc::new(MockSource::new("A").holidays(&[(1, 1, "Újév")]));
        let service = service(&[source.clone()]);

        let first = service.get_aggregation(Some(2025)).await;
        let second = service.get_aggregation(Some(2025)).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.holiday_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.workday_calls.load(Ordering::SeqCst), 1);

        service.clear_cache();
        let third = service.get_aggregation(Some(2025)).await;

        assert_eq!(source.holiday_calls.load(Ordering::SeqCst), 2);
        assert_eq!(third.holidays, first.holidays);
    }

    #[tokio::test]
    async fn test_years_are_cached_independently() {
        let source = Arc::new(MockSource::new("A").holidays(&[(1, 1, "Újév")]));
        let service = service(&[source.clone()]);

        service.get_aggregation(Some(2025)).await;
        service.get_aggregation(Some(2026)).await;
        service.get_aggregation(Some(2025)).await;

        assert_eq!(source.holiday_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_total_failure_returns_empty_result() {
        let a = Arc::new(MockSource::new("A").failing());
        let b = Arc::new(MockSource::new("B"));
        let service = service(&[a, b]);

        let result = service.get_aggregation(Some(2031)).await;

        assert_eq!(result.year, 2031);
        assert!(result.is_empty());
        assert_eq!(result.total_holidays, 0);
        assert_eq!(result.provenance.name, "None");
        assert_eq!(result.provenance.url, "");
        assert_eq!(result.provenance.year, 2031);
    }

    #[tokio::test]
    async fn test_default_year_comes_from_clock() {
        let source = Arc::new(MockSource::new("A").holidays(&[(1, 1, "Újév")]));
        let service = service(&[source]);

        assert_eq!(service.current_year(), 2025);
        let result = service.get_aggregation(None).await;
        assert_eq!(result.year, 2025);
        assert_eq!(result.holidays[0].date, date(2025, 1, 1));
    }

    #[tokio::test]
    async fn test_far_year_prefers_wide_window() {
        let narrow = Arc::new(MockSource::new("Narrow").holidays(&[(1, 1, "Újév")]));
        let wide = Arc::new(
            MockSource::new("Wide")
                .window(-10, 10)
                .holidays(&[(1, 1, "New Year")]),
        );
        let service = service(&[narrow.clone(), wide]);

        let result = service.get_aggregation(Some(2031)).await;

        assert_eq!(result.provenance.name, "Wide");
        assert_eq!(narrow.holiday_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_date_queries() {
        let source = Arc::new(
            MockSource::new("A")
                .holidays(&[(5, 1, "A munka ünnepe"), (5, 2, "Pihenőnap")])
                .workdays(&[(5, 17)]),
        );
        let service = service(&[source.clone()]);

        assert!(service.is_holiday(date(2025, 5, 2)).await);
        assert!(!service.is_holiday(date(2025, 5, 5)).await);
        assert!(service.is_weekend_workday(date(2025, 5, 17)).await);
        assert!(!service.is_weekend_workday(date(2025, 5, 18)).await);

        let check = service.check_date(date(2025, 5, 1)).await;
        assert!(check.is_holiday);
        assert_eq!(check.holiday_name.as_deref(), Some("A munka ünnepe"));
        assert!(!check.is_working_day);

        // all four lookups share one aggregation
        assert_eq!(source.holiday_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_config() {
        let config = HolidayServiceConfig::default();
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.cache_max_entries, 100);
        assert_eq!(config.source_timeout, Duration::from_secs(30));
        let options = SourceRegistryOptions::default();
        assert!(!options.include_publicholidays_for_workdays);
        assert!(!options.include_unnepnapok);
    }
}
