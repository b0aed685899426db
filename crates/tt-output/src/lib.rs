//! `tt-output` — export writers for allocated timetables.
//!
//! | Backend | Files created                                                  |
//! |---------|----------------------------------------------------------------|
//! | CSV     | `timetable_slots.csv`, `run_summary.csv`, `warnings.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by [`export_run`],
//! which flattens a [`Timetable`](tt_engine::Timetable) and
//! [`RunResult`](tt_engine::RunResult) into plain rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::{export_run, CsvWriter};
//!
//! let result = engine.run(&mut NoopObserver)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! export_run(&mut writer, &engine.timetable(), &result)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{export_run, slot_rows};
pub use row::{SlotRow, SummaryRow, WarningRow};
pub use writer::OutputWriter;
