//! Holiday resolution: first non-empty source wins.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use super::{fetch_with_timeout, CandidateValidator, FetchDiagnostics, SourceOutcome};
use crate::errors::SourceError;
use crate::models::{Holiday, Provenance};
use crate::source::HolidaySource;

/// Resolved holiday list for one year.
#[derive(Clone, Debug)]
pub struct HolidayResolution {
    pub holidays: Vec<Holiday>,
    pub provenance: Provenance,
    pub diagnostics: FetchDiagnostics,
}

/// Tries ranked sources one at a time until one yields holidays.
///
/// Failures and timeouts are logged and skipped. Conflicting entries across
/// sources are never reconciled: the accepted list comes from exactly one
/// source, or is empty with sentinel provenance.
#[derive(Clone, Debug)]
pub struct HolidayResolver {
    source_timeout: Duration,
    validator: CandidateValidator,
}

impl HolidayResolver {
    pub fn new(source_timeout: Duration) -> Self {
        Self {
            source_timeout,
            validator: CandidateValidator::new(),
        }
    }

    pub async fn resolve(
        &self,
        ranked: &[Arc<dyn HolidaySource>],
        year: i32,
    ) -> HolidayResolution {
        let mut diagnostics = FetchDiagnostics::new();

        for source in ranked {
            let descriptor = source.descriptor();
            let name = descriptor.name.clone();

            let result = fetch_with_timeout(
                &name,
                self.source_timeout,
                source.fetch_holidays(year),
            )
            .await;

            match result {
                Ok(candidates) => {
                    let holidays = self.validator.sanitize_holidays(&name, year, candidates);
                    if holidays.is_empty() {
                        info!("Source '{}' has no holidays for {}, trying next", name, year);
                        diagnostics.record(name, SourceOutcome::Empty);
                        continue;
                    }

                    info!(
                        "Accepted {} holidays for {} from '{}'",
                        holidays.len(),
                        year,
                        name
                    );
                    diagnostics.record(name.clone(), SourceOutcome::Accepted(holidays.len()));
                    info!("Holiday resolution for {}: {}", year, diagnostics.summary());

                    return HolidayResolution {
                        holidays,
                        provenance: Provenance::new(name, source.url_for(year), year),
                        diagnostics,
                    };
                }
                Err(SourceError::Timeout { .. }) => {
                    warn!("Source '{}' timed out fetching holidays for {}", name, year);
                    diagnostics.record(name, SourceOutcome::TimedOut);
                }
                Err(e) => {
                    warn!(
                        "Source '{}' failed fetching holidays for {}: {} (transient: {})",
                        name,
                        year,
                        e,
                        e.is_transient()
                    );
                    diagnostics.record(name, SourceOutcome::Failed(e.to_string()));
                }
            }
        }

        warn!(
            "No source produced holidays for {}: {}",
            year,
            diagnostics.summary()
        );
        HolidayResolution {
            holidays: Vec::new(),
            provenance: Provenance::none(year),
            diagnostics,
        }
    }
}
