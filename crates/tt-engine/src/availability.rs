//! The slot-availability predicate.
//!
//! A placement of requirement `r` for class `c` starting at `pos` is allowed
//! when all of the following hold:
//!
//! 1. `pos` is `Free` in `c`'s grid.  For a lab, `pos.next()` is also `Free`
//!    and `pos` is not the last period of the day.
//! 2. For a lab, neither cell of the pair is a configured break or lunch
//!    period.  A grid built from the same `Settings` already fails rule 1 on
//!    such cells; this rule only fires when grid and settings disagree.  It
//!    does not forbid a pair that ends right before a break.
//! 3. Every teacher of `r` is free at `pos` (and at `pos.next()` for a lab)
//!    in every class.  Multi-teacher labs need all teachers free together.
//! 4. If `r` has a room, the room is free at `pos` (and `pos.next()` for a
//!    lab).
//!
//! The check is pure.  It borrows the grid and ledgers and never mutates.

use std::fmt;

use tt_core::{ClassId, RoomId, Settings, SlotPos, TeacherId};
use tt_input::Requirement;

use crate::grid::Grid;
use crate::ledger::{RoomLedger, TeacherLedger};

/// Why a position was refused.  Used for trace logging and tests.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Blocker {
    /// The start cell is not `Free`.
    SlotTaken,
    /// A lab would start in the last period of the day.
    LastPeriod,
    /// The second cell of a lab pair is not `Free`.
    PairTaken,
    /// A lab pair touches a configured break or lunch period.
    FixedPeriod,
    TeacherBusy(TeacherId),
    RoomBusy(RoomId),
}

impl fmt::Display for Blocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocker::SlotTaken => f.write_str("slot taken"),
            Blocker::LastPeriod => f.write_str("lab cannot start in the last period"),
            Blocker::PairTaken => f.write_str("second lab period taken"),
            Blocker::FixedPeriod => f.write_str("lab pair touches a break or lunch"),
            Blocker::TeacherBusy(t) => write!(f, "{t} busy"),
            Blocker::RoomBusy(r) => write!(f, "{r} busy"),
        }
    }
}

/// Read-only view over the run state needed to answer availability queries.
#[derive(Copy, Clone)]
pub struct Availability<'a> {
    pub settings: &'a Settings,
    pub grid:     &'a Grid,
    pub teachers: &'a TeacherLedger,
    pub rooms:    &'a RoomLedger,
}

impl<'a> Availability<'a> {
    pub fn new(
        settings: &'a Settings,
        grid:     &'a Grid,
        teachers: &'a TeacherLedger,
        rooms:    &'a RoomLedger,
    ) -> Self {
        Self { settings, grid, teachers, rooms }
    }

    #[inline]
    pub fn is_available(&self, class: ClassId, pos: SlotPos, req: &Requirement) -> bool {
        self.check(class, pos, req).is_ok()
    }

    /// Like [`is_available`](Self::is_available) but names the first rule
    /// that failed.
    pub fn check(&self, class: ClassId, pos: SlotPos, req: &Requirement) -> Result<(), Blocker> {
        let grid = self.grid.class(class);
        let lab = req.is_lab();

        // ── Rule 1: grid cells ────────────────────────────────────────────
        if !grid.is_free(pos) {
            return Err(Blocker::SlotTaken);
        }
        if lab {
            if pos.period + 1 >= grid.periods() {
                return Err(Blocker::LastPeriod);
            }
            if !grid.is_free(pos.next()) {
                return Err(Blocker::PairTaken);
            }
        }

        // ── Rule 2: labs stay clear of configured breaks ──────────────────
        if lab
            && (self.settings.is_fixed_period(pos.period)
                || self.settings.is_fixed_period(pos.period + 1))
        {
            return Err(Blocker::FixedPeriod);
        }

        // ── Rule 3: every teacher jointly free ────────────────────────────
        for &teacher in &req.teachers {
            if self.teachers.is_busy(teacher, pos)
                || (lab && self.teachers.is_busy(teacher, pos.next()))
            {
                return Err(Blocker::TeacherBusy(teacher));
            }
        }

        // ── Rule 4: room free ─────────────────────────────────────────────
        if let Some(room) = req.room {
            if self.rooms.is_busy(room, pos) || (lab && self.rooms.is_busy(room, pos.next())) {
                return Err(Blocker::RoomBusy(room));
            }
        }

        Ok(())
    }
}
