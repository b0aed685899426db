//! Display-ready timetables: the grid flattened to label strings.
//!
//! [`Timetable::cells`] yields one `(class, day, period, label)` record per
//! grid cell, enough for a lossless export to any tabular format.

use tt_core::{ClassKey, Settings};

use crate::grid::Grid;

/// One class's labels, `rows[day][period]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassTimetable {
    pub key:  ClassKey,
    pub rows: Vec<Vec<String>>,
}

impl ClassTimetable {
    /// Label at 0-based `day` and `period`.
    pub fn label(&self, day: usize, period: usize) -> Option<&str> {
        self.rows.get(day)?.get(period).map(String::as_str)
    }

    /// Number of cells carrying exactly `label`.
    pub fn count(&self, label: &str) -> usize {
        self.rows.iter().flatten().filter(|l| *l == label).count()
    }
}

/// One exported cell.  `period` is 1-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimetableCell<'a> {
    pub class:  &'a ClassKey,
    pub day:    &'a str,
    pub period: usize,
    pub label:  &'a str,
}

/// All classes of a run, in class order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timetable {
    pub day_names:     Vec<String>,
    pub total_periods: usize,
    pub classes:       Vec<ClassTimetable>,
}

impl Timetable {
    /// Snapshot `grid`.  `keys[i]` names `ClassId(i)`.
    pub fn from_grid<'k, I>(settings: &Settings, grid: &Grid, keys: I) -> Self
    where
        I: IntoIterator<Item = &'k ClassKey>,
    {
        let classes = grid
            .iter()
            .zip(keys)
            .map(|((_, class_grid), key)| ClassTimetable {
                key:  key.clone(),
                rows: (0..class_grid.days())
                    .map(|d| {
                        class_grid
                            .day_row(d)
                            .iter()
                            .map(|s| s.display().to_owned())
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        Self {
            day_names: settings.day_names.clone(),
            total_periods: settings.period_count(),
            classes,
        }
    }

    pub fn class(&self, key: &ClassKey) -> Option<&ClassTimetable> {
        self.classes.iter().find(|c| &c.key == key)
    }

    /// Every cell of every class: class order, then day, then period.
    pub fn cells(&self) -> impl Iterator<Item = TimetableCell<'_>> + '_ {
        self.classes.iter().flat_map(move |class| {
            class.rows.iter().enumerate().flat_map(move |(d, row)| {
                row.iter().enumerate().map(move |(p, label)| TimetableCell {
                    class:  &class.key,
                    day:    self.day_names[d].as_str(),
                    period: p + 1,
                    label:  label.as_str(),
                })
            })
        })
    }
}
