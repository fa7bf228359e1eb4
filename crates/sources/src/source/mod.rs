//! Holiday source abstractions and implementations.
//!
//! This module contains:
//! - The `HolidaySource` trait that all sources implement
//! - Shared HTTP plumbing (`PageFetcher`) and Hungarian/English text helpers
//! - The `KnownDataSource` decorator that backs a source with a static dataset
//! - Concrete source implementations, one per site
//!
//! Each concrete source splits into an async fetch and a synchronous parse
//! function over the page body, so the parsers can be tested against inline
//! HTML fixtures without network access.

mod http;
mod known_data;
pub(crate) mod text;
mod traits;

pub mod dailynewshungary;
pub mod mfa_gov;
pub mod officeholidays;
pub mod pontosido;
pub mod publicholidays;
pub mod szakmaikamara;
pub mod timeanddate;
pub mod unnepnapok;

pub use http::PageFetcher;
pub use known_data::{
    hungary_2025, hungary_2025_bridge_days, FailurePolicy, KnownDataSource, KnownDataset,
};
pub use traits::HolidaySource;
