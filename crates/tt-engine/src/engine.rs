//! The `AllocationEngine` and its bounded placement loop.

use tracing::{debug, info, instrument, trace, warn};

use tt_core::{ClassId, RandomSource, Settings, SlotPos};
use tt_input::{Requirement, RequirementSet};

use crate::audit::audit_workload;
use crate::availability::Availability;
use crate::grid::{Grid, Occupant, Slot};
use crate::ledger::{RoomLedger, TeacherLedger};
use crate::observer::RunObserver;
use crate::report::{RequirementOutcome, RunResult, RunStats, Warning};
use crate::timetable::Timetable;
use crate::{EngineError, EngineResult};

// ── AllocationEngine ──────────────────────────────────────────────────────────

/// Owns all mutable state of one allocation run.
///
/// The grid and both ledgers belong to this instance alone; two engines never
/// share occupancy.  Each call to [`run`](Self::run) starts from empty grids
/// and ledgers, so a run is a clean recomputation from the requirements and
/// settings.  The random source is *not* reset between runs.
///
/// Create via [`EngineBuilder`](crate::EngineBuilder) or [`AllocationEngine::new`].
pub struct AllocationEngine<R: RandomSource> {
    settings:     Settings,
    requirements: RequirementSet,
    grid:         Grid,
    teachers:     TeacherLedger,
    rooms:        RoomLedger,
    rng:          R,
}

impl<R: RandomSource> AllocationEngine<R> {
    /// Validate `settings` and `requirements` and allocate empty run state.
    pub fn new(settings: Settings, requirements: RequirementSet, rng: R) -> EngineResult<Self> {
        settings.validate()?;
        for class in requirements.classes() {
            for req in &class.requirements {
                let reason = if req.teachers.is_empty() {
                    Some("no teachers")
                } else if req.periods == 0 {
                    Some("zero periods requested")
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(EngineError::InvalidRequirement {
                        class: class.key.clone(),
                        subject: req.subject.clone(),
                        reason,
                    });
                }
            }
        }

        let ignored = settings.ignored_indices();
        if !ignored.is_empty() {
            warn!(
                ?ignored,
                total_periods = settings.total_periods,
                "break/lunch periods out of range are ignored"
            );
        }

        let grid = Grid::new(&settings, requirements.class_count());
        Ok(Self {
            settings,
            requirements,
            grid,
            teachers: TeacherLedger::new(),
            rooms: RoomLedger::new(),
            rng,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Allocate every requirement of every class, then audit workloads and
    /// aggregate the result.
    ///
    /// Classes are processed in first-appearance order; within a class,
    /// labs first, then larger requests first.
    #[instrument(
        skip_all,
        fields(
            classes = self.requirements.class_count(),
            requirements = self.requirements.requirement_count(),
        )
    )]
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> EngineResult<RunResult> {
        self.reset();
        info!(
            seed = ?self.settings.seed,
            days = self.settings.day_count(),
            periods = self.settings.total_periods,
            "allocation run started"
        );
        observer.on_run_start(
            self.requirements.class_count(),
            self.requirements.requirement_count(),
        );

        let mut outcomes = Vec::with_capacity(self.requirements.requirement_count());
        let mut warnings = Vec::new();

        let Self { settings, requirements, grid, teachers, rooms, rng } = self;
        let settings: &Settings = settings;
        let requirements: &RequirementSet = requirements;
        let mut placer = Placer { settings, grid, teachers, rooms, rng };

        for class in requirements.classes() {
            observer.on_class_start(&class.key, class.requirements.len());
            for index in class.placement_order() {
                let req = &class.requirements[index];
                let outcome = placer.place(class.id, req);

                debug!(
                    class = %class.key,
                    label = %req.label,
                    placed = outcome.placed,
                    requested = outcome.requested,
                    attempts = outcome.attempts,
                    "requirement processed"
                );

                if !outcome.is_satisfied() {
                    let warning = Warning::Shortfall {
                        class:     class.key.clone(),
                        subject:   req.subject.clone(),
                        teachers:  teacher_names(requirements, req),
                        requested: outcome.requested,
                        placed:    outcome.placed,
                    };
                    warn!(%warning, "allocation shortfall");
                    warnings.push(warning);
                }

                observer.on_requirement_done(&class.key, &outcome);
                outcomes.push(outcome);
            }
        }

        if let Some(w) = audit_workload(
            placer.teachers,
            requirements.teachers(),
            settings.max_teacher_periods,
        ) {
            warnings.push(w);
        }

        let stats = RunStats::aggregate(
            requirements.class_count(),
            requirements.teacher_count(),
            &outcomes,
        );
        let result = RunResult { outcomes, warnings, stats };

        info!(
            success_rate = result.stats.success_rate,
            placed = result.stats.placed_periods,
            requested = result.stats.requested_periods,
            warnings = result.warnings.len(),
            "allocation run finished"
        );
        observer.on_run_end(&result);
        Ok(result)
    }

    /// Labels of the current grids.
    pub fn timetable(&self) -> Timetable {
        Timetable::from_grid(
            &self.settings,
            &self.grid,
            self.requirements.classes().iter().map(|c| &c.key),
        )
    }

    /// A read-only availability view over the current state.
    pub fn availability(&self) -> Availability<'_> {
        Availability::new(&self.settings, &self.grid, &self.teachers, &self.rooms)
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn requirements(&self) -> &RequirementSet {
        &self.requirements
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn teacher_ledger(&self) -> &TeacherLedger {
        &self.teachers
    }

    #[inline]
    pub fn room_ledger(&self) -> &RoomLedger {
        &self.rooms
    }

    fn reset(&mut self) {
        self.grid = Grid::new(&self.settings, self.requirements.class_count());
        self.teachers.clear();
        self.rooms.clear();
    }
}

// ── Placer ────────────────────────────────────────────────────────────────────

/// Mutable borrows of the run state, split from the requirement set so that
/// requirements can be read while the grid and ledgers are written.
struct Placer<'a, R: RandomSource> {
    settings: &'a Settings,
    grid:     &'a mut Grid,
    teachers: &'a mut TeacherLedger,
    rooms:    &'a mut RoomLedger,
    rng:      &'a mut R,
}

impl<R: RandomSource> Placer<'_, R> {
    /// Attempt-bounded randomized placement of one requirement.
    ///
    /// Every iteration counts against `max_attempts`, including those that
    /// find no candidate or fail the availability check.
    fn place(&mut self, class: ClassId, req: &Requirement) -> RequirementOutcome {
        let width = req.width();
        let max_attempts = self.settings.max_attempts;
        let mut placed: u32 = 0;
        let mut attempts: u32 = 0;

        while placed < req.periods && attempts < max_attempts {
            attempts += 1;

            // ① Day, biased toward emptier rows.
            let Some(day) = self.pick_day(class) else {
                break;
            };

            // ② Period, uniform over free starts.
            let candidates = self.candidate_periods(class, day, width);
            if candidates.is_empty() {
                trace!(day, label = %req.label, "no candidate period");
                continue;
            }
            let pos = SlotPos::new(day, candidates[self.rng.index(candidates.len())]);

            // ③ Validate.
            let check = Availability::new(self.settings, self.grid, self.teachers, self.rooms)
                .check(class, pos, req);
            if let Err(blocker) = check {
                trace!(%pos, label = %req.label, %blocker, "attempt rejected");
                continue;
            }

            // ④ Commit.
            self.commit(class, pos, req);
            placed += width as u32;
        }

        RequirementOutcome {
            class,
            subject: req.subject.clone(),
            label: req.label.clone(),
            requested: req.periods,
            placed,
            attempts,
        }
    }

    /// Weighted day choice: `weight(day) = max(1, free cells in day)`.
    fn pick_day(&mut self, class: ClassId) -> Option<usize> {
        let grid = self.grid.class(class);
        let weights: Vec<u32> = (0..grid.days())
            .map(|d| (grid.free_in_day(d) as u32).max(1))
            .collect();
        self.rng.weighted_index(&weights)
    }

    /// Free periods in `day`; for labs, only those whose successor is also
    /// free.
    fn candidate_periods(&self, class: ClassId, day: usize, width: usize) -> Vec<usize> {
        let row = self.grid.class(class).day_row(day);
        (0..row.len())
            .filter(|&p| p + width <= row.len() && row[p..p + width].iter().all(Slot::is_free))
            .collect()
    }

    /// Write the label into every cell of the placement and record every
    /// teacher (and the room, if any) in the ledgers.
    fn commit(&mut self, class: ClassId, start: SlotPos, req: &Requirement) {
        let lab = req.is_lab();
        let grid = self.grid.class_mut(class);
        for offset in 0..req.width() {
            let pos = SlotPos::new(start.day, start.period + offset);
            grid.set(
                pos,
                Slot::Occupied(Occupant {
                    label:    req.label.clone(),
                    teachers: req.teachers.clone(),
                    lab_half: lab,
                }),
            );
            for &teacher in &req.teachers {
                let fresh = self.teachers.record(teacher, pos, class);
                debug_assert!(fresh, "{teacher} double-booked at {pos}");
            }
            if let Some(room) = req.room {
                let fresh = self.rooms.record(room, pos, class);
                debug_assert!(fresh, "{room} double-booked at {pos}");
            }
        }
    }
}

fn teacher_names(requirements: &RequirementSet, req: &Requirement) -> String {
    req.teachers
        .iter()
        .map(|&t| requirements.teachers().name_or_id(t))
        .collect::<Vec<_>>()
        .join(", ")
}
