use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use log::{debug, info, warn};

use super::holidays_cache::HolidayCache;
use super::holidays_model::{AggregationResult, DateCheck};
use super::holidays_traits::HolidayServiceTrait;
use crate::constants::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_SOURCE_TIMEOUT_MS,
};
use hungarian_holidays_sources::{
    Capability, Holiday, HolidayResolver, SourceRegistry, WorkDay, WorkdayMerger, YearRanker,
};

/// Cache and timeout settings for [`HolidayService`].
#[derive(Clone, Debug)]
pub struct HolidayServiceConfig {
    pub cache_ttl: Duration,
    pub cache_max_entries: u64,
    pub source_timeout: Duration,
}

impl Default for HolidayServiceConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            source_timeout: Duration::from_millis(DEFAULT_SOURCE_TIMEOUT_MS),
        }
    }
}

/// Aggregation facade: ranking, resolution, merging and caching per year.
///
/// Concurrent misses for the same year may each run the pipeline; the last
/// one to finish overwrites the cache entry.
pub struct HolidayService {
    registry: SourceRegistry,
    cache: HolidayCache,
    resolver: HolidayResolver,
    merger: WorkdayMerger,
    clock: fn() -> i32,
}

impl HolidayService {
    pub fn new(registry: SourceRegistry, config: HolidayServiceConfig) -> Self {
        Self {
            registry,
            cache: HolidayCache::new(config.cache_ttl, config.cache_max_entries),
            resolver: HolidayResolver::new(config.source_timeout),
            merger: WorkdayMerger::new(config.source_timeout),
            clock: system_year,
        }
    }

    /// Replaces the year clock used for defaults and ranking.
    pub fn with_clock(mut self, clock: fn() -> i32) -> Self {
        self.clock = clock;
        self
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    async fn aggregate(&self, year: i32) -> AggregationResult {
        let current_year = self.current_year();
        let holiday_order = YearRanker::rank(
            self.registry.holiday_sources(),
            Capability::Holidays,
            year,
            current_year,
        );
        let workday_order = YearRanker::rank(
            self.registry.workday_sources(),
            Capability::Workdays,
            year,
            current_year,
        );

        let (resolution, merge) = tokio::join!(
            self.resolver.resolve(&holiday_order, year),
            self.merger.merge(&workday_order, year)
        );

        if resolution.provenance.is_none() {
            warn!(
                "No holiday source produced data for {}: {}",
                year,
                resolution.diagnostics.summary()
            );
        }

        let result = AggregationResult::assemble(
            year,
            resolution.holidays,
            resolution.provenance,
            merge.workdays,
        );
        info!(
            "Aggregated {}: {} holidays from '{}', {} weekend workdays",
            year, result.total_holidays, result.provenance.name, result.total_workdays
        );
        result
    }
}

fn system_year() -> i32 {
    Local::now().year()
}

#[async_trait]
impl HolidayServiceTrait for HolidayService {
    fn current_year(&self) -> i32 {
        (self.clock)()
    }

    async fn get_aggregation(&self, year: Option<i32>) -> Arc<AggregationResult> {
        let year = year.unwrap_or_else(|| self.current_year());

        if let Some(cached) = self.cache.get(year).await {
            debug!("Cache hit for {}", year);
            return cached;
        }

        let result = Arc::new(self.aggregate(year).await);
        self.cache.put(year, Arc::clone(&result)).await;
        result
    }

    async fn get_holidays(&self, year: Option<i32>) -> Vec<Holiday> {
        self.get_aggregation(year).await.holidays.clone()
    }

    async fn get_workdays(&self, year: Option<i32>) -> Vec<WorkDay> {
        self.get_aggregation(year).await.workdays.clone()
    }

    async fn is_holiday(&self, date: NaiveDate) -> bool {
        self.get_aggregation(Some(date.year()))
            .await
            .holiday_on(date)
            .is_some()
    }

    async fn is_weekend_workday(&self, date: NaiveDate) -> bool {
        self.get_aggregation(Some(date.year()))
            .await
            .workday_on(date)
            .is_some()
    }

    async fn check_date(&self, date: NaiveDate) -> DateCheck {
        let aggregation = self.get_aggregation(Some(date.year())).await;
        DateCheck::evaluate(date, &aggregation)
    }

    fn clear_cache(&self) {
        info!("Clearing holiday cache");
        self.cache.clear();
    }
}
