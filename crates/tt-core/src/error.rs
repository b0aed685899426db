//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `TtError` as one variant
//! where a configuration problem can surface through them.

use thiserror::Error;

/// The top-level error type for `tt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TtError {
    /// Settings that cannot describe a usable week (no days, no periods, …).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `tt-*` crates.
pub type TtResult<T> = Result<T, TtError>;
