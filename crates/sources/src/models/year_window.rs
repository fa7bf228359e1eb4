//! A source's preferred coverage window.

/// Years a source is expected to cover, as signed offsets from the current year.
///
/// A window of `-3..=1` evaluated in 2025 covers 2022 through 2026.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearWindow {
    pub min_offset: i32,
    pub max_offset: i32,
}

impl YearWindow {
    pub const fn new(min_offset: i32, max_offset: i32) -> Self {
        Self {
            min_offset,
            max_offset,
        }
    }

    /// First and last covered year for the given current year.
    pub fn bounds(&self, current_year: i32) -> (i32, i32) {
        (
            current_year + self.min_offset,
            current_year + self.max_offset,
        )
    }

    /// Check if the window covers `year`.
    pub fn supports(&self, year: i32, current_year: i32) -> bool {
        let (min, max) = self.bounds(current_year);
        (min..=max).contains(&year)
    }

    /// Distance from `year` to the nearest edge of the window; 0 when covered.
    pub fn distance(&self, year: i32, current_year: i32) -> u32 {
        if self.supports(year, current_year) {
            return 0;
        }
        let (min, max) = self.bounds(current_year);
        year.abs_diff(min).min(year.abs_diff(max))
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::new(-2, 2)
    }
}
