//! Per-run weekly configuration.
//!
//! # Period numbering
//!
//! `break_periods` and `lunch_period` are 1-based, as entered by users.
//! Values outside `1..=total_periods` are **silently ignored** when the grid
//! is built; they are never a validation error.  [`Settings::ignored_indices`]
//! reports what was dropped so hosts can surface it.
//!
//! If a break index equals the lunch index the cell becomes `Lunch`: breaks
//! are stamped first and lunch overrides them.

use crate::{TtError, TtResult};

/// Per-requirement placement attempt cap used when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5_000;

/// Immutable configuration for one allocation run.
///
/// Typically built with [`Settings::default`] and adjusted by the host, or
/// deserialized from JSON with the `serde` feature (missing fields take the
/// defaults).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Ordered day names; one grid row per entry.
    pub day_names: Vec<String>,

    /// Periods per day (`P`).
    pub total_periods: u32,

    /// 1-based break periods, stamped on every day.
    pub break_periods: Vec<u32>,

    /// 1-based lunch period, stamped after breaks.
    pub lunch_period: u32,

    /// A teacher with more committed periods than this is reported as
    /// overloaded.  Advisory only.
    pub max_teacher_periods: u32,

    /// Placement attempts per requirement before it is given up as a
    /// shortfall.
    pub max_attempts: u32,

    /// RNG seed.  `Some` gives a reproducible run; `None` draws from OS
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            day_names: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            total_periods:       10,
            break_periods:       vec![3, 9],
            lunch_period:        6,
            max_teacher_periods: 30,
            max_attempts:        DEFAULT_MAX_ATTEMPTS,
            seed:                None,
        }
    }
}

impl Settings {
    /// Number of days (`D`).
    #[inline]
    pub fn day_count(&self) -> usize {
        self.day_names.len()
    }

    #[inline]
    pub fn period_count(&self) -> usize {
        self.total_periods as usize
    }

    /// Reject settings that cannot describe a usable week.
    ///
    /// Out-of-range break/lunch indices are *not* rejected; see the module
    /// docs.
    pub fn validate(&self) -> TtResult<()> {
        if self.day_names.is_empty() {
            return Err(TtError::Config("at least one day is required".into()));
        }
        if let Some(blank) = self.day_names.iter().position(|d| d.trim().is_empty()) {
            return Err(TtError::Config(format!("day name #{} is blank", blank + 1)));
        }
        for (i, day) in self.day_names.iter().enumerate() {
            if self.day_names[..i].contains(day) {
                return Err(TtError::Config(format!("day {day:?} is listed twice")));
            }
        }
        if self.total_periods == 0 {
            return Err(TtError::Config("total_periods must be at least 1".into()));
        }
        if self.max_teacher_periods == 0 {
            return Err(TtError::Config("max_teacher_periods must be positive".into()));
        }
        if self.max_attempts == 0 {
            return Err(TtError::Config("max_attempts must be positive".into()));
        }
        Ok(())
    }

    #[inline]
    fn in_range(&self, one_based: u32) -> bool {
        (1..=self.total_periods).contains(&one_based)
    }

    /// In-range break periods as sorted, deduplicated 0-based indices.
    pub fn resolved_breaks(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .break_periods
            .iter()
            .copied()
            .filter(|&p| self.in_range(p))
            .map(|p| (p - 1) as usize)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// The lunch period as a 0-based index, or `None` if out of range.
    pub fn resolved_lunch(&self) -> Option<usize> {
        self.in_range(self.lunch_period)
            .then(|| (self.lunch_period - 1) as usize)
    }

    /// 1-based break/lunch values that fall outside `1..=total_periods`.
    pub fn ignored_indices(&self) -> Vec<u32> {
        self.break_periods
            .iter()
            .copied()
            .chain(std::iter::once(self.lunch_period))
            .filter(|&p| !self.in_range(p))
            .collect()
    }

    /// `true` if the 0-based `period` is a configured, in-range break or lunch.
    pub fn is_fixed_period(&self, period: usize) -> bool {
        let Ok(one_based) = u32::try_from(period + 1) else {
            return false;
        };
        self.in_range(one_based)
            && (self.lunch_period == one_based || self.break_periods.contains(&one_based))
    }
}

/// Parse a comma-separated period list such as `"3, 9"`.
///
/// Fragments that are not unsigned integers are skipped, so `"3, x, 9"`
/// yields `[3, 9]`.
pub fn parse_period_list(s: &str) -> Vec<u32> {
    s.split(',')
        .filter_map(|part| part.trim().parse::<u32>().ok())
        .collect()
}
