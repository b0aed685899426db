//! `tt-engine` — weekly timetable allocation for many classes at once.
//!
//! # Run outline
//!
//! ```text
//! reset grid + ledgers (every run starts empty)
//! observer.on_run_start                     ← single progress yield point
//! for class in first-appearance order:
//!   for requirement in (priority asc, periods desc):
//!     repeat until placed ≥ requested or attempts == max_attempts:
//!       ① day    ← weighted by max(1, free cells in that day)
//!       ② period ← uniform over free starts (free pairs for labs)
//!       ③ check  ← availability predicate (grid + teacher/room ledgers)
//!       ④ commit ← grid cells, every teacher's ledger, room ledger
//!     shortfall warning if still short
//! workload audit over the teacher ledger
//! aggregate stats → RunResult
//! ```
//!
//! Placements are never retracted.  A requirement placed early can block a
//! later one; the later one ends as a shortfall.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_engine::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(settings, requirements).seed(42).build()?;
//! let result = engine.run(&mut NoopObserver)?;
//! for cell in engine.timetable().cells() { /* export */ }
//! ```

pub mod audit;
pub mod availability;
pub mod builder;
pub mod engine;
pub mod error;
pub mod grid;
pub mod ledger;
pub mod observer;
pub mod report;
pub mod timetable;


pub use audit::{audit_workload, teacher_loads};
pub use availability::{Availability, Blocker};
pub use builder::EngineBuilder;
pub use engine::AllocationEngine;
pub use error::{EngineError, EngineResult};
pub use grid::{ClassGrid, Grid, Occupant, Slot};
pub use ledger::{OccupancyLedger, RoomLedger, TeacherLedger};
pub use observer::{NoopObserver, RunObserver};
pub use report::{RequirementOutcome, RunResult, RunStats, Warning};
pub use timetable::{ClassTimetable, Timetable, TimetableCell};
