//! Hungarian Holidays Sources Crate
//!
//! This crate provides the source-aggregation core for Hungarian public
//! holidays and weekend workdays (munkanap-áthelyezés).
//!
//! # Overview
//!
//! The sources crate supports:
//! - Multiple independent extraction strategies (PontosIdo, MFA, TimeAndDate, ...)
//! - Per-year suitability ranking of sources
//! - Fallback resolution of the holiday list (first non-empty source wins)
//! - First-seen-wins merging of weekend workdays across sources
//! - Static known-data fallback composed as a source decorator
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  SourceRegistry  |  (explicit priority lists)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   YearRanker     |  (distance to preferred year window)
//! +------------------+
//!          |
//!    +-----+------+
//!    v            v
//! +----------+ +-----------+
//! | Holiday  | | Workday   |
//! | Resolver | | Merger    |
//! +----------+ +-----------+
//!    |            |
//!    v            v
//! +------------------+
//! |  HolidaySource   |  (PontosIdo, MFA, DailyNewsHungary, ...)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Holiday`] - A public holiday or bridge day
//! - [`WorkDay`] - A Saturday/Sunday designated as a working day
//! - [`SourceDescriptor`] - Static name, year window and capabilities of a source
//! - [`Provenance`] - Which source supplied an accepted holiday list
//! - [`HolidaySource`] - The trait every source implements

pub mod errors;
pub mod models;
pub mod registry;
pub mod source;

#[cfg(test)]
mod testing;

pub use errors::SourceError;

pub use models::{
    Capability, Holiday, Provenance, SourceCapabilities, SourceDescriptor, SourceId, WorkDay,
    YearWindow,
};

pub use source::dailynewshungary::DailyNewsHungarySource;
pub use source::mfa_gov::MfaGovSource;
pub use source::officeholidays::OfficeHolidaysSource;
pub use source::pontosido::PontosIdoSource;
pub use source::publicholidays::PublicHolidaysSource;
pub use source::szakmaikamara::SzakmaiKamaraSource;
pub use source::timeanddate::TimeAndDateSource;
pub use source::unnepnapok::UnnepnapokSource;
pub use source::{
    hungary_2025, hungary_2025_bridge_days, FailurePolicy, HolidaySource, KnownDataSource,
    KnownDataset, PageFetcher,
};

pub use registry::{
    CandidateIssue, CandidateValidator, FetchDiagnostics, HolidayResolution, HolidayResolver, SourceAttempt,
    SourceOutcome, SourceRegistry, WorkdayMerge, WorkdayMerger, YearRanker,
};
