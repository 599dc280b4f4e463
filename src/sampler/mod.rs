//! Samplers
//!
//! Strategies that decide whether they can currently produce an item and, if
//! so, produce one.
//!
//! Leaf samplers:
//! - [`NewSampler`] - introduces never seen items in pool order
//! - [`WeightedSampler`] - weighted draw over items that are not too recent
//! - [`FixedSampler`] / [`NeverSampler`] - test and debug helpers
//!
//! Combinators:
//! - [`PrioritizedSampler`] - first ready child wins
//! - [`CombinedSampler`] - weighted choice among ready children
//!
//! No sampler holds state between calls. Every call is an evaluation of the
//! passed-in [`SamplingState`]; the only side effect is consuming randomness.

mod combinator;
mod simple;
mod weighted;

use rand::RngCore;

use crate::error::SamplingResult;
use crate::types::{Sample, SamplingState};

pub use combinator::{CombinedEntry, CombinedSampler, PrioritizedSampler};
pub use simple::{FixedSampler, NeverSampler, NewSampler};
pub use weighted::WeightedSampler;

/// Item selection strategy
pub trait Sampler<Item>: Send + Sync {
    /// Whether [`Sampler::sample`] can currently produce an item
    fn ready(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> bool;

    /// Produce an item, failing with [`crate::SamplingError`] if not ready
    fn sample(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> SamplingResult<Sample<Item>>;
}

pub type BoxedSampler<Item> = Box<dyn Sampler<Item>>;

impl<Item, S: Sampler<Item> + ?Sized> Sampler<Item> for Box<S> {
    fn ready(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> bool {
        (**self).ready(state, rng)
    }

    fn sample(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> SamplingResult<Sample<Item>> {
        (**self).sample(state, rng)
    }
}
