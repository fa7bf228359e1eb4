//! Hungarian Holidays Core - aggregation facade, cache and response assembly.
//!
//! This crate wires the sources crate into a cached, per-year lookup. It
//! owns no scraping logic itself: sources are registered in explicit
//! priority order by [`holidays::default_registry`] (or by the caller) and
//! handed to [`holidays::HolidayService`].

pub mod constants;
pub mod errors;
pub mod holidays;

pub use holidays::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
