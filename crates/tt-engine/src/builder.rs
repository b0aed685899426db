//! Fluent builder for constructing an [`AllocationEngine`].

use tt_core::{RandomSource, RunRng, Settings};
use tt_input::RequirementSet;

use crate::{AllocationEngine, EngineResult};

/// Fluent builder for [`AllocationEngine`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                              |
/// |----------------------|--------------------------------------|
/// | `.seed(s)`           | `settings.seed`, else OS entropy     |
/// | `.max_attempts(n)`   | `settings.max_attempts`              |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(settings, requirements)
///     .seed(42)
///     .build()?;
/// let result = engine.run(&mut NoopObserver)?;
/// ```
pub struct EngineBuilder {
    settings:     Settings,
    requirements: RequirementSet,
}

impl EngineBuilder {
    pub fn new(settings: Settings, requirements: RequirementSet) -> Self {
        Self { settings, requirements }
    }

    /// Fix the RNG seed, overriding `settings.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.settings.seed = Some(seed);
        self
    }

    /// Per-requirement attempt cap, overriding `settings.max_attempts`.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.settings.max_attempts = attempts;
        self
    }

    /// Validate inputs and return an engine backed by [`RunRng`].
    pub fn build(self) -> EngineResult<AllocationEngine<RunRng>> {
        let rng = RunRng::from_seed_option(self.settings.seed);
        AllocationEngine::new(self.settings, self.requirements, rng)
    }

    /// Like [`build`](Self::build) with a caller-supplied random source.
    /// `settings.seed` is ignored.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> EngineResult<AllocationEngine<R>> {
        AllocationEngine::new(self.settings, self.requirements, rng)
    }
}
