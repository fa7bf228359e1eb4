//! Year-suitability ranking.

use std::sync::Arc;

use crate::models::Capability;
use crate::source::HolidaySource;

/// Orders sources for a requested year.
///
/// Sources lacking the capability are dropped; the rest are sorted by
/// ascending distance to their preferred year window. The sort is stable,
/// so sources at equal distance keep their registration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct YearRanker;

impl YearRanker {
    pub fn rank(
        sources: &[Arc<dyn HolidaySource>],
        capability: Capability,
        year: i32,
        current_year: i32,
    ) -> Vec<Arc<dyn HolidaySource>> {
        let mut ranked: Vec<Arc<dyn HolidaySource>> = sources
            .iter()
            .filter(|source| source.descriptor().capabilities.has(capability))
            .cloned()
            .collect();
        ranked.sort_by_key(|source| source.distance(year, current_year));
        ranked
    }
}
