//! Post-run teacher workload audit.
//!
//! Read-only over the teacher ledger: an overloaded teacher is reported, never
//! unscheduled.

use tracing::warn;

use tt_core::{NameTable, TeacherId};

use crate::ledger::TeacherLedger;
use crate::report::Warning;

/// Committed periods per teacher, ascending `TeacherId`.  Teachers with no
/// placements are omitted.
pub fn teacher_loads(ledger: &TeacherLedger) -> Vec<(TeacherId, usize)> {
    ledger
        .keys()
        .into_iter()
        .map(|t| (t, ledger.load(t)))
        .collect()
}

/// One consolidated warning listing every teacher above `max_periods`, or
/// `None` if nobody is.
pub fn audit_workload(
    ledger:      &TeacherLedger,
    names:       &NameTable<TeacherId>,
    max_periods: u32,
) -> Option<Warning> {
    let limit = max_periods as usize;
    let overloaded: Vec<(String, usize)> = teacher_loads(ledger)
        .into_iter()
        .filter(|&(_, load)| load > limit)
        .map(|(t, load)| (names.name_or_id(t), load))
        .collect();

    if overloaded.is_empty() {
        return None;
    }

    let warning = Warning::WorkloadExceeded { limit: max_periods, teachers: overloaded };
    warn!(%warning, "teacher workload exceeded");
    Some(warning)
}
