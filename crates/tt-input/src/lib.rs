//! `tt-input` — the ingestion boundary between tabular rows and the engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`record`]      | `RawRow`, `ValidatedRow`, `SessionKind`, `validate_row` |
//! | [`requirement`] | `Requirement`, `ClassRequirements`, `RequirementSet`   |
//! | [`loader`]      | `read_rows`, `load_requirements_csv`, `load_requirements_reader` |
//! | [`error`]       | `InputError`, `InputResult<T>`                         |
//!
//! # Flow
//!
//! ```text
//! CSV text ──read_rows──▶ Vec<Result<ValidatedRow, InputError>>
//!          ──RequirementSet::from_rows──▶ classes in first-appearance order,
//!                                         teacher/room names interned
//! ```
//!
//! Nothing past this crate ever sees an unvalidated row: a single rejected
//! row halts ingestion and no `RequirementSet` is produced.

pub mod error;
pub mod loader;
pub mod record;
pub mod requirement;

#[cfg(test)]
mod tests;

pub use error::{InputError, InputResult};
pub use loader::{load_requirements_csv, load_requirements_reader, read_rows};
pub use record::{validate_row, RawRow, SessionKind, ValidatedRow};
pub use requirement::{ClassRequirements, Priority, Requirement, RequirementSet};
