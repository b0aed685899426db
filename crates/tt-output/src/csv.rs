//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `timetable_slots.csv`
//! - `run_summary.csv`
//! - `warnings.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SlotRow, SummaryRow, WarningRow};

pub const SLOTS_FILE: &str = "timetable_slots.csv";
pub const SUMMARY_FILE: &str = "run_summary.csv";
pub const WARNINGS_FILE: &str = "warnings.csv";

/// Writes run output to three CSV files.
pub struct CsvWriter {
    slots:    Writer<File>,
    summary:  Writer<File>,
    warnings: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (truncating) the three files, and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut slots = Writer::from_path(dir.join(SLOTS_FILE))?;
        slots.write_record(["class", "day", "period", "label"])?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record([
            "classes",
            "requirements",
            "teachers",
            "requested_periods",
            "placed_periods",
            "success_rate",
        ])?;

        let mut warnings = Writer::from_path(dir.join(WARNINGS_FILE))?;
        warnings.write_record(["kind", "message"])?;

        Ok(Self {
            slots,
            summary,
            warnings,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_slots(&mut self, rows: &[SlotRow]) -> OutputResult<()> {
        for row in rows {
            let period = row.period.to_string();
            self.slots.write_record([
                row.class.as_str(),
                row.day.as_str(),
                period.as_str(),
                row.label.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.classes.to_string(),
            row.requirements.to_string(),
            row.teachers.to_string(),
            row.requested_periods.to_string(),
            row.placed_periods.to_string(),
            row.success_rate.to_string(),
        ])?;
        Ok(())
    }

    fn write_warnings(&mut self, rows: &[WarningRow]) -> OutputResult<()> {
        for row in rows {
            self.warnings.write_record([row.kind, row.message.as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.slots.flush()?;
        self.summary.flush()?;
        self.warnings.flush()?;
        Ok(())
    }
}
