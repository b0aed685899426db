//! Drive any [`OutputWriter`] from a finished run.

use tracing::debug;

use tt_engine::{RunResult, Timetable};

use crate::writer::OutputWriter;
use crate::{OutputResult, SlotRow, SummaryRow, WarningRow};

/// One [`SlotRow`] per grid cell: class order, then day, then period.
pub fn slot_rows(timetable: &Timetable) -> Vec<SlotRow> {
    timetable
        .cells()
        .map(|cell| SlotRow {
            class:  cell.class.to_string(),
            day:    cell.day.to_owned(),
            period: cell.period as u32,
            label:  cell.label.to_owned(),
        })
        .collect()
}

/// Write every cell, the summary, and every warning, then `finish`.
pub fn export_run<W: OutputWriter>(
    writer:    &mut W,
    timetable: &Timetable,
    result:    &RunResult,
) -> OutputResult<()> {
    let slots = slot_rows(timetable);
    writer.write_slots(&slots)?;
    writer.write_summary(&SummaryRow::from(&result.stats))?;

    let warnings: Vec<WarningRow> = result.warnings.iter().map(WarningRow::from).collect();
    if !warnings.is_empty() {
        writer.write_warnings(&warnings)?;
    }
    writer.finish()?;

    debug!(slots = slots.len(), warnings = warnings.len(), "run exported");
    Ok(())
}
