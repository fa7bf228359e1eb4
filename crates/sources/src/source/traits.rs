//! The trait every holiday source implements.

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::{Holiday, SourceDescriptor, WorkDay};

/// Trait for holiday data sources.
///
/// Implementations fetch a page for a requested year and extract holidays
/// and/or weekend workdays from it.
///
/// # Contract
///
/// - "Nothing found" is `Ok(vec![])`; only transport and parse failures are `Err`.
/// - Sources do not cache; every call may hit the network.
/// - Returned records are candidates. The resolver and the merger filter out
///   dates outside the requested year, duplicate dates and non-weekend workdays.
///
/// The year-suitability methods take the current year explicitly so ranking
/// stays deterministic under test.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Static name, preferred year window and capabilities.
    fn descriptor(&self) -> SourceDescriptor;

    /// Human-readable source name, used for provenance and logging.
    fn name(&self) -> String {
        self.descriptor().name.into_owned()
    }

    /// The URL this source reads for the given year.
    fn url_for(&self, year: i32) -> String;

    /// Check if `year` lies within the preferred window.
    fn supports(&self, year: i32, current_year: i32) -> bool {
        self.descriptor().window.supports(year, current_year)
    }

    /// Distance from `year` to the preferred window; 0 when supported.
    fn distance(&self, year: i32, current_year: i32) -> u32 {
        self.descriptor().window.distance(year, current_year)
    }

    /// Fetch holiday candidates for `year`.
    ///
    /// The default implementation returns an empty list, for sources that
    /// only publish workday information.
    async fn fetch_holidays(&self, _year: i32) -> Result<Vec<Holiday>, SourceError> {
        Ok(Vec::new())
    }

    /// Fetch weekend workday candidates for `year`.
    ///
    /// The default implementation returns an empty list, for sources that
    /// only publish holiday tables.
    async fn fetch_workdays(&self, _year: i32) -> Result<Vec<WorkDay>, SourceError> {
        Ok(Vec::new())
    }
}
