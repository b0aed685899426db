//! Weekly grid coordinates.
//!
//! Both axes are 0-based internally.  Configuration and rendered output use
//! 1-based period numbers (`Period 1 … Period P`); conversion happens only at
//! those two boundaries.

use std::fmt;

/// One cell position in a class's weekly grid.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPos {
    /// 0-based index into `Settings::day_names`.
    pub day:    usize,
    /// 0-based period index within the day.
    pub period: usize,
}

impl SlotPos {
    #[inline]
    pub const fn new(day: usize, period: usize) -> Self {
        Self { day, period }
    }

    /// The position directly after this one on the same day.
    ///
    /// No bounds check; callers compare against `total_periods` first.
    #[inline]
    pub const fn next(self) -> Self {
        Self { day: self.day, period: self.period + 1 }
    }

    /// 1-based period number as shown to users.
    #[inline]
    pub const fn period_number(self) -> usize {
        self.period + 1
    }
}

impl fmt::Display for SlotPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}P{}", self.day, self.period_number())
    }
}
