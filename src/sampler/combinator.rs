use rand::RngCore;
use tracing::debug;

use super::{BoxedSampler, Sampler};
use crate::draw::{weighted_draw, Weighted};
use crate::error::{SamplingError, SamplingResult};
use crate::sanitize::check_non_negative;
use crate::types::{Sample, SamplingState};

// ==================== Prioritized ====================

/// Ordered list of samplers, the first ready one answers.
pub struct PrioritizedSampler<Item> {
    samplers: Vec<BoxedSampler<Item>>,
}

impl<Item> PrioritizedSampler<Item> {
    pub fn new(samplers: Vec<BoxedSampler<Item>>) -> Self {
        Self { samplers }
    }

    /// Append a sampler with lower priority than all existing ones
    pub fn then(mut self, sampler: impl Sampler<Item> + 'static) -> Self {
        self.samplers.push(Box::new(sampler));
        self
    }

    pub fn len(&self) -> usize {
        self.samplers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samplers.is_empty()
    }
}

impl<Item> Default for PrioritizedSampler<Item> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<Item> Sampler<Item> for PrioritizedSampler<Item> {
    fn ready(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> bool {
        self.samplers.iter().any(|s| s.ready(state, rng))
    }

    /// Delegates to the first ready child. A child that reported ready but
    /// turns out not ready on sampling hands over to the next one.
    fn sample(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> SamplingResult<Sample<Item>> {
        for (priority, sampler) in self.samplers.iter().enumerate() {
            if !sampler.ready(state, rng) {
                continue;
            }
            debug!(priority, "prioritized sampler delegating");
            match sampler.sample(state, rng) {
                Err(SamplingError::NotReady { sampler: child }) => {
                    debug!(priority, %child, "child not ready after all, falling back");
                }
                result => return result,
            }
        }
        Err(SamplingError::not_ready("prioritized"))
    }
}

// ==================== Combined ====================

/// A child of a [`CombinedSampler`] with its static weight
pub struct CombinedEntry<Item> {
    pub sampler: BoxedSampler<Item>,
    pub weight: f64,
}

impl<Item> CombinedEntry<Item> {
    pub fn new(sampler: impl Sampler<Item> + 'static, weight: f64) -> SamplingResult<Self> {
        Ok(Self {
            sampler: Box::new(sampler),
            weight: check_non_negative("combined sampler weight", weight)?,
        })
    }
}

/// Weighted choice among the ready children.
///
/// Only the entries' static weights are used, never per-item weights.
/// Entries with weight zero are never chosen.
pub struct CombinedSampler<Item> {
    entries: Vec<CombinedEntry<Item>>,
}

impl<Item> CombinedSampler<Item> {
    pub fn new(entries: Vec<CombinedEntry<Item>>) -> Self {
        Self { entries }
    }

    /// Add a child with the given static weight
    pub fn with(mut self, sampler: impl Sampler<Item> + 'static, weight: f64) -> SamplingResult<Self> {
        self.entries.push(CombinedEntry::new(sampler, weight)?);
        Ok(self)
    }

    fn is_candidate(entry: &CombinedEntry<Item>, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> bool {
        entry.weight > 0.0 && entry.sampler.ready(state, rng)
    }
}

impl<Item> Default for CombinedSampler<Item> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<Item> Sampler<Item> for CombinedSampler<Item> {
    fn ready(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> bool {
        self.entries
            .iter()
            .any(|entry| Self::is_candidate(entry, state, rng))
    }

    /// Draws among the ready children. A drawn child that turns out not
    /// ready on sampling is dropped and the draw repeated over the rest.
    fn sample(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> SamplingResult<Sample<Item>> {
        let mut candidates: Vec<&CombinedEntry<Item>> = self
            .entries
            .iter()
            .filter(|entry| Self::is_candidate(entry, state, rng))
            .collect();

        while !candidates.is_empty() {
            debug!(candidates = candidates.len(), "combined sampler drawing among ready samplers");
            let weighted: Vec<Weighted<usize>> = candidates
                .iter()
                .enumerate()
                .map(|(index, entry)| Weighted::new(index, entry.weight))
                .collect();
            let index = weighted_draw(weighted, rng)?;
            let result = candidates[index].sampler.sample(state, rng);
            match result {
                Err(SamplingError::NotReady { sampler: child }) => {
                    debug!(%child, "drawn sampler not ready after all, redrawing");
                    candidates.remove(index);
                }
                result => return result,
            }
        }
        Err(SamplingError::not_ready("combined"))
    }
}
