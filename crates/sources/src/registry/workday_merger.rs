//! Workday merging: first-seen-wins across every ranked source.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use futures::future::join_all;
use log::{debug, info, warn};

use super::{fetch_with_timeout, CandidateValidator, FetchDiagnostics, SourceOutcome};
use crate::errors::SourceError;
use crate::models::WorkDay;
use crate::source::HolidaySource;

/// Merged weekend workdays for one year.
#[derive(Clone, Debug)]
pub struct WorkdayMerge {
    pub workdays: Vec<WorkDay>,
    pub diagnostics: FetchDiagnostics,
}

/// Combines partial workday lists from several sources.
///
/// All sources are fetched concurrently, each under the per-source timeout.
/// Results are then merged strictly in rank order: a higher-ranked source's
/// record for a date is authoritative and later sources only fill gaps.
#[derive(Clone, Debug)]
pub struct WorkdayMerger {
    source_timeout: Duration,
    validator: CandidateValidator,
}

impl WorkdayMerger {
    pub fn new(source_timeout: Duration) -> Self {
        Self {
            source_timeout,
            validator: CandidateValidator::new(),
        }
    }

    pub async fn merge(&self, ranked: &[Arc<dyn HolidaySource>], year: i32) -> WorkdayMerge {
        let fetches = ranked.iter().map(|source| {
            let source = Arc::clone(source);
            let timeout = self.source_timeout;
            async move {
                let name = source.name();
                fetch_with_timeout(&name, timeout, source.fetch_workdays(year)).await
            }
        });
        let results = join_all(fetches).await;

        let mut diagnostics = FetchDiagnostics::new();
        let mut accepted: BTreeMap<NaiveDate, WorkDay> = BTreeMap::new();

        for (source, result) in ranked.iter().zip(results) {
            let name = source.descriptor().name;
            match result {
                Ok(candidates) => {
                    let workdays = self.validator.sanitize_workdays(&name, year, candidates);
                    if workdays.is_empty() {
                        diagnostics.record(name, SourceOutcome::Empty);
                        continue;
                    }

                    let mut added = 0;
                    for workday in workdays {
                        if accepted.contains_key(&workday.date) {
                            debug!(
                                "{}: {} already provided by a higher-ranked source",
                                name, workday.date
                            );
                            continue;
                        }
                        accepted.insert(workday.date, workday);
                        added += 1;
                    }
                    diagnostics.record(name, SourceOutcome::Accepted(added));
                }
                Err(SourceError::Timeout { .. }) => {
                    warn!("Source '{}' timed out fetching workdays for {}", name, year);
                    diagnostics.record(name, SourceOutcome::TimedOut);
                }
                Err(e) => {
                    warn!(
                        "Source '{}' failed fetching workdays for {}: {} (transient: {})",
                        name,
                        year,
                        e,
                        e.is_transient()
                    );
                    diagnostics.record(name, SourceOutcome::Failed(e.to_string()));
                }
            }
        }

        info!(
            "Merged {} weekend workdays for {}: {}",
            accepted.len(),
            year,
            diagnostics.summary()
        );

        WorkdayMerge {
            workdays: accepted.into_values().collect(),
            diagnostics,
        }
    }
}
