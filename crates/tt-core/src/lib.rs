//! `tt-core` — foundational types for the timetable allocation workspace.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and few external ones (`rand`, `rustc-hash`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `ClassId`, `TeacherId`, `RoomId`, `ClassKey`, `NameTable` |
//! | [`week`]      | `SlotPos`, a (day, period) coordinate in a weekly grid |
//! | [`settings`]  | `Settings`, `parse_period_list`                         |
//! | [`rng`]       | `RandomSource` trait, `RunRng` (seedable)               |
//! | [`error`]     | `TtError`, `TtResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `Settings`.      |

pub mod error;
pub mod ids;
pub mod rng;
pub mod settings;
pub mod week;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TtError, TtResult};
pub use ids::{ClassId, ClassKey, NameTable, RoomId, TeacherId, TypedId};
pub use rng::{RandomSource, RunRng};
pub use settings::{parse_period_list, Settings, DEFAULT_MAX_ATTEMPTS};
pub use week::SlotPos;
