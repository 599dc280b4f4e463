use rand::RngCore;
use tracing::{debug, trace};

use super::Sampler;
use crate::draw::{weighted_draw, Weighted};
use crate::error::{SamplingError, SamplingResult};
use crate::types::{Sample, SamplingState, SinceLast, WeightState};
use crate::weighter::Weighter;

/// Weighted draw over items that were not presented too recently.
///
/// An item qualifies iff at least `recency_threshold` other items were
/// presented since its last occurrence and its weighter assigns it a
/// positive weight.
pub struct WeightedSampler {
    name: String,
    weighter: Box<dyn Weighter>,
    recency_threshold: u64,
    soften_for_small_pools: bool,
}

impl WeightedSampler {
    pub fn new(name: impl Into<String>, weighter: impl Weighter + 'static, recency_threshold: u64) -> Self {
        Self {
            name: name.into(),
            weighter: Box::new(weighter),
            recency_threshold,
            soften_for_small_pools: false,
        }
    }

    /// Lower the recency threshold to half the pool size for pools too
    /// small to satisfy it.
    pub fn soften_for_small_pools(mut self) -> Self {
        self.soften_for_small_pools = true;
        self
    }

    fn effective_threshold(&self, pool_size: usize) -> u64 {
        if self.soften_for_small_pools {
            self.recency_threshold.min((pool_size / 2) as u64)
        } else {
            self.recency_threshold
        }
    }

    fn qualifying_weight(&self, state: &WeightState, threshold: u64, rng: &mut dyn RngCore) -> Option<f64> {
        if state.items_since_last_occurrence < SinceLast::Ago(threshold) {
            return None;
        }
        let weight = self.weighter.weight(state, rng);
        (weight > 0.0).then_some(weight)
    }

    fn weighted_items<'a, Item>(
        &self,
        state: &'a SamplingState<Item>,
        rng: &mut dyn RngCore,
    ) -> Vec<Weighted<&'a Item>> {
        let threshold = self.effective_threshold(state.len());
        state
            .weight_states
            .iter()
            .filter_map(|s| {
                self.qualifying_weight(&s.state, threshold, rng)
                    .map(|weight| Weighted::new(&s.item, weight))
            })
            .collect()
    }
}

impl std::fmt::Debug for WeightedSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedSampler")
            .field("name", &self.name)
            .field("recency_threshold", &self.recency_threshold)
            .field("soften_for_small_pools", &self.soften_for_small_pools)
            .finish_non_exhaustive()
    }
}

impl<Item: Clone> Sampler<Item> for WeightedSampler {
    fn ready(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> bool {
        let threshold = self.effective_threshold(state.len());
        state
            .weight_states
            .iter()
            .any(|s| self.qualifying_weight(&s.state, threshold, rng).is_some())
    }

    fn sample(&self, state: &SamplingState<Item>, rng: &mut dyn RngCore) -> SamplingResult<Sample<Item>> {
        let items = self.weighted_items(state, rng);
        trace!(sampler = %self.name, candidates = items.len(), "weighted sampler candidates");
        if items.is_empty() {
            return Err(SamplingError::not_ready(&self.name));
        }
        let item = weighted_draw(items, rng)?;
        debug!(sampler = %self.name, "drew weighted item");
        Ok(Sample::new(item.clone(), self.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemAndWeightState;
    use crate::weighter::{FixedWeighter, RepeatWeighter, UniformWeighter};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seen(items_since: u64) -> WeightState {
        WeightState {
            total_occurrences: 1,
            items_since_last_occurrence: SinceLast::Ago(items_since),
            ..WeightState::fresh()
        }
    }

    fn pool(items_since: &[u64]) -> SamplingState<usize> {
        SamplingState::new(
            items_since
                .iter()
                .enumerate()
                .map(|(i, n)| ItemAndWeightState::new(i, seen(*n)))
                .collect(),
            None,
        )
    }

    #[test]
    fn test_weighted_sampler_skips_recent_items() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampler = WeightedSampler::new("uniform", UniformWeighter, 4);
        let state = pool(&[0, 1, 2, 3, 4, 10]);
        for _ in 0..500 {
            let sample = sampler.sample(&state, &mut rng).unwrap();
            assert!(sample.item >= 4, "Recent item {} should not be drawn", sample.item);
            assert_eq!(sample.sampler_name, "uniform");
        }
    }

    #[test]
    fn test_weighted_sampler_not_ready_when_all_recent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampler = WeightedSampler::new("uniform", UniformWeighter, 4);
        let state = pool(&[0, 1, 2, 3]);
        assert!(!sampler.ready(&state, &mut rng));
        assert_eq!(
            sampler.sample(&state, &mut rng),
            Err(SamplingError::not_ready("uniform"))
        );
    }

    #[test]
    fn test_weighted_sampler_never_seen_items_are_not_recent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampler = WeightedSampler::new("uniform", UniformWeighter, 1000);
        let state = SamplingState::new(vec![ItemAndWeightState::new("fresh", WeightState::fresh())], None);
        assert!(sampler.ready(&state, &mut rng));
        assert_eq!(sampler.sample(&state, &mut rng).unwrap().item, "fresh");
    }

    #[test]
    fn test_weighted_sampler_not_ready_with_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampler = WeightedSampler::new("zero", FixedWeighter::new(0.0).unwrap(), 0);
        let state = pool(&[5, 6, 7]);
        assert!(!sampler.ready(&state, &mut rng));
        assert!(sampler.sample(&state, &mut rng).is_err());
    }

    #[test]
    fn test_weighted_sampler_uses_weighter() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampler = WeightedSampler::new("repeat", RepeatWeighter::new(2.0).unwrap(), 1);
        // Only item 1 is due: 2^1 distorted stays below 3
        let state = pool(&[1, 3]);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&state, &mut rng).unwrap().item, 1);
        }
    }

    #[test]
    fn test_softened_threshold_for_small_pools() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = pool(&[0, 1, 2]);
        let strict = WeightedSampler::new("uniform", UniformWeighter, 4);
        assert!(!strict.ready(&state, &mut rng));

        // min(floor(3 / 2), 4) = 1
        let softened = WeightedSampler::new("uniform", UniformWeighter, 4).soften_for_small_pools();
        for _ in 0..100 {
            assert_ne!(softened.sample(&state, &mut rng).unwrap().item, 0);
        }
    }
}
