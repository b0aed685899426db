//! Run outcomes, warnings, and summary statistics.
//!
//! This is the only data (besides the [`Timetable`](crate::Timetable)) that
//! rendering and export collaborators receive.

use std::fmt;

use tt_core::{ClassId, ClassKey};

// ── Warning ───────────────────────────────────────────────────────────────────

/// A non-fatal finding surfaced after a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A requirement ran out of attempts before its demand was placed.
    Shortfall {
        class:     ClassKey,
        subject:   String,
        /// Teacher names joined with `", "`.
        teachers:  String,
        requested: u32,
        placed:    u32,
    },

    /// Teachers whose committed periods exceed the configured maximum.
    /// One warning lists every such teacher with their total.
    WorkloadExceeded {
        limit:    u32,
        teachers: Vec<(String, usize)>,
    },
}

impl Warning {
    /// `requested - placed` for a shortfall, `0` otherwise.
    pub fn gap(&self) -> u32 {
        match self {
            Warning::Shortfall { requested, placed, .. } => requested.saturating_sub(*placed),
            Warning::WorkloadExceeded { .. } => 0,
        }
    }

    /// Short machine-friendly tag used by exporters.
    pub fn kind(&self) -> &'static str {
        match self {
            Warning::Shortfall { .. } => "shortfall",
            Warning::WorkloadExceeded { .. } => "workload",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Shortfall { class, subject, teachers, requested, placed } => write!(
                f,
                "Could not allocate all periods for {subject} ({teachers}) in {class}: \
                 placed {placed} of {requested} ({} short).",
                self.gap()
            ),
            Warning::WorkloadExceeded { limit, teachers } => {
                write!(f, "Warning: Teachers overloaded (>{limit} periods): ")?;
                for (i, (name, total)) in teachers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name} ({total})")?;
                }
                Ok(())
            }
        }
    }
}

// ── RequirementOutcome ────────────────────────────────────────────────────────

/// How far one requirement got.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequirementOutcome {
    pub class:     ClassId,
    pub subject:   String,
    pub label:     String,
    pub requested: u32,
    /// May exceed `requested` by one for a lab with an odd request, since
    /// labs are placed two periods at a time.
    pub placed:    u32,
    /// Attempts consumed, including the successful ones.
    pub attempts:  u32,
}

impl RequirementOutcome {
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.placed >= self.requested
    }

    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.requested.saturating_sub(self.placed)
    }
}

// ── RunStats ──────────────────────────────────────────────────────────────────

/// Summary counters for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunStats {
    pub class_count:       usize,
    pub requirement_count: usize,
    pub teacher_count:     usize,
    pub requested_periods: u64,
    /// Placed periods, each requirement capped at its request.
    pub placed_periods:    u64,
    /// `placed_periods / requested_periods` as a rounded percentage.
    /// `100` when nothing was requested.
    pub success_rate:      u32,
}

impl RunStats {
    pub fn aggregate(
        class_count:   usize,
        teacher_count: usize,
        outcomes:      &[RequirementOutcome],
    ) -> Self {
        let requested: u64 = outcomes.iter().map(|o| u64::from(o.requested)).sum();
        let placed: u64 = outcomes
            .iter()
            .map(|o| u64::from(o.placed.min(o.requested)))
            .sum();
        let success_rate = if requested == 0 {
            100
        } else {
            ((placed as f64 / requested as f64) * 100.0).round() as u32
        };
        Self {
            class_count,
            requirement_count: outcomes.len(),
            teacher_count,
            requested_periods: requested,
            placed_periods: placed,
            success_rate,
        }
    }
}

// ── RunResult ─────────────────────────────────────────────────────────────────

/// Everything a finished run reports besides the grids themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// One entry per requirement, in processing order.
    pub outcomes: Vec<RequirementOutcome>,
    /// Shortfalls in processing order, then at most one workload warning.
    pub warnings: Vec<Warning>,
    pub stats:    RunStats,
}

impl RunResult {
    /// `true` when every requirement was fully placed and nobody is
    /// overloaded.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn shortfalls(&self) -> impl Iterator<Item = &Warning> + '_ {
        self.warnings
            .iter()
            .filter(|w| matches!(w, Warning::Shortfall { .. }))
    }

    pub fn workload_warning(&self) -> Option<&Warning> {
        self.warnings
            .iter()
            .find(|w| matches!(w, Warning::WorkloadExceeded { .. }))
    }
}
