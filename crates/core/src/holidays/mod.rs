//! Holidays module - aggregation models, cache, service, and traits.

mod holidays_cache;
mod holidays_model;
mod holidays_service;
mod holidays_traits;
mod sources_factory;

#[cfg(test)]
mod holidays_service_tests;

pub use holidays_cache::HolidayCache;
pub use holidays_model::{parse_date, validate_year, AggregationResult, DateCheck};
pub use holidays_service::{HolidayService, HolidayServiceConfig};
pub use holidays_traits::HolidayServiceTrait;
pub use sources_factory::{default_registry, SourceRegistryOptions};

pub use hungarian_holidays_sources::{Holiday, Provenance, WorkDay};
