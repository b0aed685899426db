//! Plain data row types written by output backends.

use tt_engine::{RunStats, Warning};

/// One cell of one class's timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    /// Compact class key, `"CSE_2_A"`.
    pub class:  String,
    pub day:    String,
    /// 1-based.
    pub period: u32,
    /// Requirement label, or `FREE` / `Break` / `Lunch`.
    pub label:  String,
}

/// Run-level counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub classes:           u64,
    pub requirements:      u64,
    pub teachers:          u64,
    pub requested_periods: u64,
    pub placed_periods:    u64,
    /// Rounded percent.
    pub success_rate:      u32,
}

impl From<&RunStats> for SummaryRow {
    fn from(stats: &RunStats) -> Self {
        Self {
            classes:           stats.class_count as u64,
            requirements:      stats.requirement_count as u64,
            teachers:          stats.teacher_count as u64,
            requested_periods: stats.requested_periods,
            placed_periods:    stats.placed_periods,
            success_rate:      stats.success_rate,
        }
    }
}

/// One warning in display form, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningRow {
    /// `shortfall` or `workload`.
    pub kind:    &'static str,
    pub message: String,
}

impl From<&Warning> for WarningRow {
    fn from(w: &Warning) -> Self {
        Self { kind: w.kind(), message: w.to_string() }
    }
}
