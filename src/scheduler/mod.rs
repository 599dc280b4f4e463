//! Drill Scheduler
//!
//! Owns a configured sampler together with its random number generator, so
//! callers only hand in the sampling state for each request.
//!
//! Usage scenarios:
//! - Training sessions that need the next item to present
//! - Reproducible simulations and tests via [`Scheduler::with_seed`]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::SamplingResult;
use crate::sampler::{BoxedSampler, Sampler};
use crate::types::{Sample, SamplingState};

pub struct Scheduler<Item> {
    /// Root of the sampler tree
    sampler: BoxedSampler<Item>,
    /// Random number generator
    rng: ChaCha8Rng,
}

impl<Item> Scheduler<Item> {
    /// Create a scheduler seeded from OS entropy
    pub fn new(sampler: impl Sampler<Item> + 'static) -> Self {
        Self {
            sampler: Box::new(sampler),
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a scheduler with a specific seed (for testing)
    pub fn with_seed(sampler: impl Sampler<Item> + 'static, seed: u64) -> Self {
        Self {
            sampler: Box::new(sampler),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Whether an item can be produced for this state
    pub fn ready(&mut self, state: &SamplingState<Item>) -> bool {
        self.sampler.ready(state, &mut self.rng)
    }

    /// Pick the next item, failing if nothing is ready
    pub fn sample(&mut self, state: &SamplingState<Item>) -> SamplingResult<Sample<Item>> {
        self.sampler.sample(state, &mut self.rng)
    }

    /// Pick the next item, `None` if nothing is due
    pub fn next(&mut self, state: &SamplingState<Item>) -> SamplingResult<Option<Sample<Item>>> {
        if !self.ready(state) {
            debug!(pool_size = state.len(), "nothing due");
            return Ok(None);
        }
        self.sample(state).map(Some)
    }
}
