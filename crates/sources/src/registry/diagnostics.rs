//! Per-source attempt tracking for aggregation diagnostics.

use crate::models::SourceId;

/// What happened when a source was consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOutcome {
    /// The source contributed this many records after validation.
    Accepted(usize),

    /// The source answered but nothing usable survived validation.
    Empty,

    /// The fetch failed with a transport, HTTP or parse error.
    Failed(String),

    /// The fetch did not complete within the per-source timeout.
    TimedOut,
}

/// Record of a single source attempt.
#[derive(Clone, Debug)]
pub struct SourceAttempt {
    pub source: SourceId,
    pub outcome: SourceOutcome,
}

/// Ordered record of every source consulted for one request.
#[derive(Clone, Debug, Default)]
pub struct FetchDiagnostics {
    pub attempts: Vec<SourceAttempt>,
}

impl FetchDiagnostics {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record(&mut self, source: SourceId, outcome: SourceOutcome) {
        self.attempts.push(SourceAttempt { source, outcome });
    }

    /// Summary for logging, e.g. `A: ERROR (HTTP 503 from A) -> B: SUCCESS (11)`.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(|a| match &a.outcome {
                SourceOutcome::Accepted(count) => format!("{}: SUCCESS ({})", a.source, count),
                SourceOutcome::Empty => format!("{}: EMPTY", a.source),
                SourceOutcome::Failed(err) => format!("{}: ERROR ({})", a.source, err),
                SourceOutcome::TimedOut => format!("{}: TIMEOUT", a.source),
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Check if any source contributed records.
    pub fn has_success(&self) -> bool {
        self.attempts
            .iter()
            .any(|a| matches!(a.outcome, SourceOutcome::Accepted(_)))
    }

    /// Sources that failed or timed out.
    pub fn failures(&self) -> Vec<&SourceId> {
        self.attempts
            .iter()
            .filter(|a| {
                matches!(
                    a.outcome,
                    SourceOutcome::Failed(_) | SourceOutcome::TimedOut
                )
            })
            .map(|a| &a.source)
            .collect()
    }
}
