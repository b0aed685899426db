use thiserror::Error;

use tt_core::{ClassKey, TtError};

/// Errors that stop a run before any placement is committed.
///
/// Shortfalls and overloads are not errors; they are [`crate::Warning`]s in
/// the run result.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] TtError),

    #[error("requirement {subject:?} of class {class} is invalid: {reason}")]
    InvalidRequirement {
        class:   ClassKey,
        subject: String,
        reason:  &'static str,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
