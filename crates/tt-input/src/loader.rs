//! CSV requirement loader.
//!
//! See [`crate::record`] for the column layout.  Header names are matched
//! exactly after trimming; column order is free and unknown columns are
//! ignored.  Blank lines are skipped.
//!
//! Validation is all-or-nothing at this level: [`load_requirements_reader`]
//! stops at the first rejected row so that no partial requirement set can
//! reach the engine.  Hosts that want to list every bad row call
//! [`read_rows`] and inspect the per-row results themselves.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::record::{validate_row, RawRow, ValidatedRow};
use crate::requirement::RequirementSet;
use crate::{InputError, InputResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse and validate every row, returning one tagged result per data row.
///
/// The outer `Err` is reserved for failures that make the file unreadable
/// (I/O, malformed CSV framing); a bad field is an inner `Err`.
pub fn read_rows<R: Read>(reader: R) -> InputResult<Vec<InputResult<ValidatedRow>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        rows.push(validate_row(i + 1, &raw));
    }
    Ok(rows)
}

/// Load a [`RequirementSet`] from a CSV file.
pub fn load_requirements_csv(path: &Path) -> InputResult<RequirementSet> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    load_requirements_reader(file)
}

/// Like [`load_requirements_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for hosts that already
/// hold the upload in memory.
pub fn load_requirements_reader<R: Read>(reader: R) -> InputResult<RequirementSet> {
    let rows = read_rows(reader)?;
    let total = rows.len();

    let mut valid = Vec::with_capacity(total);
    for row in rows {
        match row {
            Ok(v) => valid.push(v),
            Err(e) => {
                warn!(error = %e, "input rejected");
                return Err(e);
            }
        }
    }

    let set = RequirementSet::from_rows(valid);
    debug!(
        rows = total,
        classes = set.class_count(),
        teachers = set.teacher_count(),
        "requirements loaded"
    );
    Ok(set)
}
