//! Holiday data models
//!
//! This module contains the core data types for holiday aggregation:
//! - `types` - Type aliases for common identifiers (SourceId)
//! - `holiday` - Holiday and WorkDay records
//! - `year_window` - A source's preferred coverage window relative to the current year
//! - `descriptor` - Static source metadata (SourceDescriptor, SourceCapabilities)
//! - `provenance` - Which source supplied an accepted holiday list

mod descriptor;
mod holiday;
mod provenance;
mod types;
mod year_window;

pub use descriptor::{Capability, SourceCapabilities, SourceDescriptor};
pub use holiday::{is_weekend, weekday_name, Holiday, WorkDay};
pub use provenance::{Provenance, NO_SOURCE_NAME};
pub use types::SourceId;
pub use year_window::YearWindow;
