//! In-memory aggregation cache with TTL using moka

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use super::holidays_model::AggregationResult;

/// Per-year cache of aggregation results.
///
/// Entries expire after a fixed TTL and are never returned once expired.
/// Capacity is bounded; the least useful entries are evicted first.
#[derive(Clone)]
pub struct HolidayCache {
    inner: Cache<i32, Arc<AggregationResult>>,
}

impl HolidayCache {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        Self {
            inner: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(max_entries)
                .build(),
        }
    }

    pub async fn get(&self, year: i32) -> Option<Arc<AggregationResult>> {
        self.inner.get(&year).await
    }

    pub async fn put(&self, year: i32, result: Arc<AggregationResult>) {
        self.inner.insert(year, result).await;
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.inner.invalidate_all();
    }

    /// Approximate number of cached years.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl std::fmt::Debug for HolidayCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayCache")
            .field("entry_count", &self.entry_count())
            .finish()
    }
}
