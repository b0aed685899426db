//! Run observer trait for progress reporting.

use tt_core::ClassKey;

use crate::report::{RequirementOutcome, RunResult};

/// Callbacks invoked by [`AllocationEngine::run`](crate::AllocationEngine::run).
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// `on_run_start` is the one point where a host may hand control back to its
/// event loop (e.g. to paint a spinner).  After it returns, the run proceeds
/// to completion without further yields.
pub trait RunObserver {
    fn on_run_start(&mut self, _classes: usize, _requirements: usize) {}

    fn on_class_start(&mut self, _class: &ClassKey, _requirements: usize) {}

    fn on_requirement_done(&mut self, _class: &ClassKey, _outcome: &RequirementOutcome) {}

    fn on_run_end(&mut self, _result: &RunResult) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
