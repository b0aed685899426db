//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SlotRow, SummaryRow, WarningRow};

/// Sink for one run's export.
pub trait OutputWriter {
    /// Write a batch of `(class, day, period) → label` rows.
    fn write_slots(&mut self, rows: &[SlotRow]) -> OutputResult<()>;

    /// Write the run summary.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Write a batch of warnings.
    fn write_warnings(&mut self, rows: &[WarningRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
