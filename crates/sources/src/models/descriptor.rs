//! Static source metadata.

use super::{SourceId, YearWindow};

/// What kind of records a source can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Holidays,
    Workdays,
}

/// Describes the capabilities of a holiday source.
///
/// Used by the ranker to decide which sources take part in holiday
/// resolution and which in workday merging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceCapabilities {
    /// Whether the source can produce a holiday list.
    pub holidays: bool,

    /// Whether the source can produce weekend workdays.
    pub workdays: bool,
}

impl SourceCapabilities {
    pub const HOLIDAYS_ONLY: Self = Self {
        holidays: true,
        workdays: false,
    };

    pub const WORKDAYS_ONLY: Self = Self {
        holidays: false,
        workdays: true,
    };

    pub const BOTH: Self = Self {
        holidays: true,
        workdays: true,
    };

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Holidays => self.holidays,
            Capability::Workdays => self.workdays,
        }
    }
}

/// Name, preferred year window and capabilities of a source.
///
/// Static per source; never changes at runtime.
#[derive(Clone, Debug)]
pub struct SourceDescriptor {
    pub name: SourceId,
    pub window: YearWindow,
    pub capabilities: SourceCapabilities,
}

impl SourceDescriptor {
    pub const fn new(
        name: &'static str,
        window: YearWindow,
        capabilities: SourceCapabilities,
    ) -> Self {
        Self {
            name: SourceId::Borrowed(name),
            window,
            capabilities,
        }
    }
}
