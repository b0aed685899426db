//! Per-class weekly grids.
//!
//! # Layout
//!
//! Each [`ClassGrid`] is a flat `Vec<Slot>` of `days × periods` cells in
//! day-major order, so one day's row is a contiguous slice.  Dimensions are
//! fixed at construction and never change for the lifetime of a run.
//!
//! # Fixed cells
//!
//! `Break` and `Lunch` are stamped by [`ClassGrid::new`] and are never
//! written again: [`ClassGrid::set`] is only ever called on cells the
//! availability checker has confirmed `Free`.

use tt_core::{ClassId, Settings, SlotPos, TeacherId};

// ── Slot ──────────────────────────────────────────────────────────────────────

/// Who occupies a committed cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub label:    String,
    pub teachers: Vec<TeacherId>,
    /// `true` for both cells of a two-period lab block.
    pub lab_half: bool,
}

/// One cell of a weekly grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Free,
    Break,
    Lunch,
    Occupied(Occupant),
}

impl Slot {
    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self, Slot::Free)
    }

    /// `true` for `Break` and `Lunch`.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Slot::Break | Slot::Lunch)
    }

    /// Text handed to renderers and exporters.
    pub fn display(&self) -> &str {
        match self {
            Slot::Free => "FREE",
            Slot::Break => "Break",
            Slot::Lunch => "Lunch",
            Slot::Occupied(o) => &o.label,
        }
    }
}

// ── ClassGrid ─────────────────────────────────────────────────────────────────

/// The `D × P` weekly matrix of one class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassGrid {
    days:    usize,
    periods: usize,
    cells:   Vec<Slot>,
}

impl ClassGrid {
    /// All cells `Free`, then `Break` at each in-range break period, then
    /// `Lunch` at the in-range lunch period (overriding a coinciding break).
    pub fn new(settings: &Settings) -> Self {
        let days = settings.day_count();
        let periods = settings.period_count();
        let mut cells = vec![Slot::Free; days * periods];

        let breaks = settings.resolved_breaks();
        let lunch = settings.resolved_lunch();
        for row in cells.chunks_mut(periods.max(1)) {
            for &b in &breaks {
                row[b] = Slot::Break;
            }
            if let Some(l) = lunch {
                row[l] = Slot::Lunch;
            }
        }

        Self { days, periods, cells }
    }

    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    #[inline]
    pub fn periods(&self) -> usize {
        self.periods
    }

    #[inline]
    fn offset(&self, pos: SlotPos) -> usize {
        debug_assert!(pos.day < self.days && pos.period < self.periods, "{pos} out of bounds");
        pos.day * self.periods + pos.period
    }

    /// # Panics
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn get(&self, pos: SlotPos) -> &Slot {
        &self.cells[self.offset(pos)]
    }

    /// `false` for positions past the end of the day.
    #[inline]
    pub fn is_free(&self, pos: SlotPos) -> bool {
        pos.day < self.days && pos.period < self.periods && self.get(pos).is_free()
    }

    /// Overwrite one cell.
    ///
    /// Precondition: the cell is currently `Free`.  The grid does not enforce
    /// this; the engine only calls `set` after a successful availability
    /// check.
    #[inline]
    pub fn set(&mut self, pos: SlotPos, slot: Slot) {
        let i = self.offset(pos);
        debug_assert!(self.cells[i].is_free(), "overwriting non-free cell {pos}");
        self.cells[i] = slot;
    }

    /// One day's cells, period order.
    pub fn day_row(&self, day: usize) -> &[Slot] {
        let start = day * self.periods;
        &self.cells[start..start + self.periods]
    }

    pub fn free_in_day(&self, day: usize) -> usize {
        self.day_row(day).iter().filter(|s| s.is_free()).count()
    }

    /// Every cell with its position, day-major.
    pub fn iter(&self) -> impl Iterator<Item = (SlotPos, &Slot)> + '_ {
        let periods = self.periods;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, s)| (SlotPos::new(i / periods, i % periods), s))
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// All class grids of one run, indexed by `ClassId`.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    classes: Vec<ClassGrid>,
}

impl Grid {
    /// `class_count` fresh grids seeded from `settings`.
    pub fn new(settings: &Settings, class_count: usize) -> Self {
        let template = ClassGrid::new(settings);
        Self { classes: vec![template; class_count] }
    }

    /// # Panics
    /// Panics if `class` was not issued for this run.
    #[inline]
    pub fn class(&self, class: ClassId) -> &ClassGrid {
        &self.classes[class.index()]
    }

    #[inline]
    pub fn class_mut(&mut self, class: ClassId) -> &mut ClassGrid {
        &mut self.classes[class.index()]
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassGrid)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, g)| (ClassId(i as u32), g))
    }
}
