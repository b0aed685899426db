use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// A row with a missing/blank field, a non-positive period count, or an
    /// unknown session type.  `line` is the 1-based data row number.
    #[error("row {line} rejected: {reason}")]
    Rejected { line: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
