//! Requirements grouped per class, with teacher and room names interned.

use std::collections::HashMap;

use tt_core::{ClassId, ClassKey, NameTable, RoomId, TeacherId};

use crate::record::{SessionKind, ValidatedRow};

// ── Priority ──────────────────────────────────────────────────────────────────

/// Placement order within a class: labs before theory.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Priority {
    Lab = 1,
    Theory = 2,
}

impl Priority {
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }
}

// ── Requirement ───────────────────────────────────────────────────────────────

/// One scheduling demand for one class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Requirement {
    pub subject:  String,
    /// Never empty.  Labs may list several teachers who must all be free.
    pub teachers: Vec<TeacherId>,
    /// Requested periods per week, always `> 0`.
    pub periods:  u32,
    pub kind:     SessionKind,
    /// Only set for labs.
    pub room:     Option<RoomId>,
    /// Text written into every grid cell this requirement occupies.
    pub label:    String,
}

impl Requirement {
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.kind == SessionKind::Lab
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        match self.kind {
            SessionKind::Lab => Priority::Lab,
            SessionKind::Theory => Priority::Theory,
        }
    }

    /// Periods committed by one successful placement (1 or 2).
    #[inline]
    pub fn width(&self) -> usize {
        self.kind.width()
    }
}

/// `"Math (Alice)"` or `"Physics LAB (Bob, Carol)"`.
pub fn display_label(subject: &str, teachers: &[String], kind: SessionKind) -> String {
    let names = teachers.join(", ");
    match kind {
        SessionKind::Theory => format!("{subject} ({names})"),
        SessionKind::Lab => format!("{subject} LAB ({names})"),
    }
}

// ── ClassRequirements ─────────────────────────────────────────────────────────

/// All requirements of one class, in input order.
#[derive(Clone, Debug)]
pub struct ClassRequirements {
    pub id:           ClassId,
    pub key:          ClassKey,
    pub requirements: Vec<Requirement>,
}

impl ClassRequirements {
    /// Indices into `requirements` in placement order: priority ascending,
    /// then requested periods descending.  Ties keep input order.
    pub fn placement_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.requirements.len()).collect();
        order.sort_by(|&a, &b| {
            let ra = &self.requirements[a];
            let rb = &self.requirements[b];
            ra.priority()
                .cmp(&rb.priority())
                .then(rb.periods.cmp(&ra.periods))
        });
        order
    }

    pub fn requested_periods(&self) -> u64 {
        self.requirements.iter().map(|r| u64::from(r.periods)).sum()
    }
}

// ── RequirementSet ────────────────────────────────────────────────────────────

/// The complete, validated input of one allocation run.
///
/// Classes appear in the order their first row appeared; `classes[i].id ==
/// ClassId(i)`.
#[derive(Clone, Debug, Default)]
pub struct RequirementSet {
    classes:     Vec<ClassRequirements>,
    class_index: HashMap<ClassKey, ClassId>,
    teachers:    NameTable<TeacherId>,
    rooms:       NameTable<RoomId>,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group validated rows by class.
    pub fn from_rows<I: IntoIterator<Item = ValidatedRow>>(rows: I) -> Self {
        let mut set = Self::new();
        for row in rows {
            set.push_row(row);
        }
        set
    }

    /// Append one row, creating its class on first sight.  Returns the
    /// row's class id.
    ///
    /// Repeated teacher names collapse to their first appearance, so a
    /// requirement never holds the same teacher twice.
    pub fn push_row(&mut self, mut row: ValidatedRow) -> ClassId {
        let class_id = match self.class_index.get(&row.class) {
            Some(&id) => id,
            None => {
                let id = ClassId(self.classes.len() as u32);
                self.class_index.insert(row.class.clone(), id);
                self.classes.push(ClassRequirements {
                    id,
                    key:          row.class.clone(),
                    requirements: Vec::new(),
                });
                id
            }
        };

        let mut seen = Vec::with_capacity(row.teachers.len());
        row.teachers.retain(|t| {
            let fresh = !seen.contains(t);
            if fresh {
                seen.push(t.clone());
            }
            fresh
        });

        let label = display_label(&row.subject, &row.teachers, row.kind);
        let teachers = row.teachers.iter().map(|t| self.teachers.intern(t)).collect();
        let room = row.room.as_deref().map(|r| self.rooms.intern(r));

        self.classes[class_id.index()].requirements.push(Requirement {
            subject: row.subject,
            teachers,
            periods: row.periods,
            kind: row.kind,
            room,
            label,
        });
        class_id
    }

    #[inline]
    pub fn classes(&self) -> &[ClassRequirements] {
        &self.classes
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassRequirements> {
        self.classes.get(id.index())
    }

    pub fn class_id(&self, key: &ClassKey) -> Option<ClassId> {
        self.class_index.get(key).copied()
    }

    #[inline]
    pub fn teachers(&self) -> &NameTable<TeacherId> {
        &self.teachers
    }

    #[inline]
    pub fn rooms(&self) -> &NameTable<RoomId> {
        &self.rooms
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn requirement_count(&self) -> usize {
        self.classes.iter().map(|c| c.requirements.len()).sum()
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
