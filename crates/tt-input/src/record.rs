//! Row records: the raw deserialized form and its validated counterpart.
//!
//! # CSV format
//!
//! One row per scheduling demand.  Rows sharing Department/Year/Section form
//! one class.  `Room` is optional and only meaningful for labs.
//!
//! ```csv
//! Department,Year,Section,Subject,Teacher,PeriodsPerWeek,Type,Room
//! CSE,2,A,Mathematics,Alice,5,theory,
//! CSE,2,A,Physics,"Bob, Carol",2,lab,PhysLab1
//! ```
//!
//! **`Teacher`** may hold several names separated by `,` or `;`.  Every
//! listed teacher must be free for each placed period.

use serde::Deserialize;

use tt_core::ClassKey;

use crate::{InputError, InputResult};

// ── SessionKind ───────────────────────────────────────────────────────────────

/// Whether a requirement is placed one period at a time or as a two-period
/// block.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SessionKind {
    Theory,
    Lab,
}

impl SessionKind {
    /// Case-insensitive parse of the `Type` column.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "theory" => Some(SessionKind::Theory),
            "lab" => Some(SessionKind::Lab),
            _ => None,
        }
    }

    /// Consecutive periods one placement occupies.
    #[inline]
    pub fn width(self) -> usize {
        match self {
            SessionKind::Theory => 1,
            SessionKind::Lab => 2,
        }
    }
}

// ── RawRow ────────────────────────────────────────────────────────────────────

/// A CSV row exactly as deserialized.  Every field is optional so that a
/// missing column surfaces as a per-row rejection rather than a parse error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Department", default)]
    pub department: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Section", default)]
    pub section: Option<String>,
    #[serde(rename = "Subject", default)]
    pub subject: Option<String>,
    #[serde(rename = "Teacher", default)]
    pub teacher: Option<String>,
    #[serde(rename = "PeriodsPerWeek", default)]
    pub periods_per_week: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(rename = "Room", default)]
    pub room: Option<String>,
}

// ── ValidatedRow ──────────────────────────────────────────────────────────────

/// A row that passed [`validate_row`].  All strings are trimmed and
/// non-empty; `periods > 0`; `teachers` is non-empty and duplicate-free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRow {
    pub class:    ClassKey,
    pub subject:  String,
    pub teachers: Vec<String>,
    pub periods:  u32,
    pub kind:     SessionKind,
    /// Only ever `Some` for labs.
    pub room:     Option<String>,
}

impl ValidatedRow {
    /// A single-teacher theory row.
    pub fn theory(class: ClassKey, subject: &str, teacher: &str, periods: u32) -> Self {
        Self {
            class,
            subject:  subject.to_owned(),
            teachers: vec![teacher.to_owned()],
            periods,
            kind:     SessionKind::Theory,
            room:     None,
        }
    }

    /// A lab row taught jointly by `teachers`.
    pub fn lab(class: ClassKey, subject: &str, teachers: &[&str], periods: u32) -> Self {
        Self {
            class,
            subject:  subject.to_owned(),
            teachers: teachers.iter().map(|t| (*t).to_owned()).collect(),
            periods,
            kind:     SessionKind::Lab,
            room:     None,
        }
    }

    /// Attach a lab room.  Ignored for theory rows.
    pub fn with_room(mut self, room: &str) -> Self {
        if self.kind == SessionKind::Lab {
            self.room = Some(room.to_owned());
        }
        self
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Check one raw row.  `line` is the 1-based data row number used in the
/// rejection message.
pub fn validate_row(line: usize, raw: &RawRow) -> InputResult<ValidatedRow> {
    let reject = |reason: String| InputError::Rejected { line, reason };

    let department = required(&raw.department, "Department").map_err(reject)?;
    let year = required(&raw.year, "Year").map_err(reject)?;
    let section = required(&raw.section, "Section").map_err(reject)?;
    let subject = required(&raw.subject, "Subject").map_err(reject)?;
    let teacher_field = required(&raw.teacher, "Teacher").map_err(reject)?;
    let periods_field = required(&raw.periods_per_week, "PeriodsPerWeek").map_err(reject)?;
    let kind_field = required(&raw.kind, "Type").map_err(reject)?;

    let periods = match periods_field.parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n)
            .map_err(|_| reject(format!("PeriodsPerWeek {n} is too large")))?,
        Ok(n) => return Err(reject(format!("PeriodsPerWeek must be positive, got {n}"))),
        Err(_) => {
            return Err(reject(format!(
                "PeriodsPerWeek {periods_field:?} is not an integer"
            )))
        }
    };

    let kind = SessionKind::parse(kind_field)
        .ok_or_else(|| reject(format!("Type {kind_field:?}: expected \"theory\" or \"lab\"")))?;

    let teachers = split_teachers(teacher_field);
    if teachers.is_empty() {
        return Err(reject("Teacher lists no names".into()));
    }

    let room = match kind {
        SessionKind::Lab => raw
            .room
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_owned),
        SessionKind::Theory => None,
    };

    Ok(ValidatedRow {
        class: ClassKey::new(department, year, section),
        subject: subject.to_owned(),
        teachers,
        periods,
        kind,
        room,
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, String> {
    match field.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("missing {name}")),
    }
}

/// Split a `Teacher` cell on `,`/`;`, dropping blanks and repeats.
fn split_teachers(field: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in field.split([',', ';']).map(str::trim) {
        if !name.is_empty() && !out.iter().any(|t| t == name) {
            out.push(name.to_owned());
        }
    }
    out
}
