//! Provenance of an accepted holiday list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name used when no source produced a holiday list.
pub const NO_SOURCE_NAME: &str = "None";

/// Which source supplied the holiday list of an aggregation.
///
/// Workdays may blend several sources and have no single provenance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub name: String,
    /// The source's URL for the requested year
    pub url: String,
    pub year: i32,
    pub fetched_at: DateTime<Utc>,
}

impl Provenance {
    pub fn new(name: impl Into<String>, url: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            year,
            fetched_at: Utc::now(),
        }
    }

    /// Sentinel provenance for a year where every source failed or was empty.
    pub fn none(year: i32) -> Self {
        Self::new(NO_SOURCE_NAME, "", year)
    }

    pub fn is_none(&self) -> bool {
        self.name == NO_SOURCE_NAME && self.url.is_empty()
    }
}
