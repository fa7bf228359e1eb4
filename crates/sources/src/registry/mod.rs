//! Source registry and aggregation protocols.
//!
//! This module provides orchestration for holiday sources, including:
//! - Registration in explicit priority order
//! - Year-suitability ranking
//! - Holiday resolution (first non-empty source wins)
//! - Workday merging (first-seen-wins per date)
//! - Candidate validation and per-request diagnostics

mod diagnostics;
mod holiday_resolver;
mod ranker;
mod validator;
mod workday_merger;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::SourceError;
use crate::source::HolidaySource;

pub use diagnostics::{FetchDiagnostics, SourceAttempt, SourceOutcome};
pub use holiday_resolver::{HolidayResolution, HolidayResolver};
pub use ranker::YearRanker;
pub use validator::{CandidateIssue, CandidateValidator};
pub use workday_merger::{WorkdayMerge, WorkdayMerger};

/// Registered sources in priority order.
///
/// Holiday and workday lists are separate because the two protocols use
/// different source sets and orders. Registration order breaks ranking ties.
#[derive(Clone, Default)]
pub struct SourceRegistry {
    holiday_sources: Vec<Arc<dyn HolidaySource>>,
    workday_sources: Vec<Arc<dyn HolidaySource>>,
}

impl SourceRegistry {
    pub fn new(
        holiday_sources: Vec<Arc<dyn HolidaySource>>,
        workday_sources: Vec<Arc<dyn HolidaySource>>,
    ) -> Self {
        Self {
            holiday_sources,
            workday_sources,
        }
    }

    pub fn with_holiday_source(mut self, source: Arc<dyn HolidaySource>) -> Self {
        self.holiday_sources.push(source);
        self
    }

    pub fn with_workday_source(mut self, source: Arc<dyn HolidaySource>) -> Self {
        self.workday_sources.push(source);
        self
    }

    pub fn holiday_sources(&self) -> &[Arc<dyn HolidaySource>] {
        &self.holiday_sources
    }

    pub fn workday_sources(&self) -> &[Arc<dyn HolidaySource>] {
        &self.workday_sources
    }

    /// Names of the holiday sources, in registration order.
    pub fn holiday_source_names(&self) -> Vec<String> {
        self.holiday_sources.iter().map(|s| s.name()).collect()
    }

    /// Names of the workday sources, in registration order.
    pub fn workday_source_names(&self) -> Vec<String> {
        self.workday_sources.iter().map(|s| s.name()).collect()
    }
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("holiday_sources", &self.holiday_source_names())
            .field("workday_sources", &self.workday_source_names())
            .finish()
    }
}

/// Run a source fetch under `limit`, mapping expiry to [`SourceError::Timeout`].
pub(crate) async fn fetch_with_timeout<T, F>(
    source_name: &str,
    limit: Duration,
    fetch: F,
) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    match tokio::time::timeout(limit, fetch).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout {
            source_name: source_name.to_string(),
        }),
    }
}
