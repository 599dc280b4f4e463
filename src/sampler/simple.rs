use rand::RngCore;
use tracing::debug;

use super::Sampler;
use crate::error::{SamplingError, SamplingResult};
use crate::types::{Sample, SamplingState, FIXED_SAMPLER_NAME};

// ==================== New ====================

/// Introduces never seen items in the order they entered the pool.
///
/// Deterministic. Skips the queued next item so a new item is never
/// presented twice in a row.
#[derive(Clone, Debug)]
pub struct NewSampler {
    name: String,
}

impl NewSampler {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn first_new<'a, Item: PartialEq>(&self, state: &'a SamplingState<Item>) -> Option<&'a Item> {
        state
            .weight_states
            .iter()
            .find(|s| s.state.is_new() && !state.is_next_item(&s.item))
            .map(|s| &s.item)
    }
}

impl<Item: Clone + PartialEq> Sampler<Item> for NewSampler {
    fn ready(&self, state: &SamplingState<Item>, _rng: &mut dyn RngCore) -> bool {
        self.first_new(state).is_some()
    }

    fn sample(&self, state: &SamplingState<Item>, _rng: &mut dyn RngCore) -> SamplingResult<Sample<Item>> {
        let item = self
            .first_new(state)
            .ok_or_else(|| SamplingError::not_ready(&self.name))?;
        debug!(sampler = %self.name, "introducing new item");
        Ok(Sample::new(item.clone(), self.name.clone()))
    }
}

// ==================== Fixed ====================

/// Always ready, always returns the same item
#[derive(Clone, Debug)]
pub struct FixedSampler<Item> {
    value: Item,
}

impl<Item> FixedSampler<Item> {
    pub fn new(value: Item) -> Self {
        Self { value }
    }
}

impl<Item: Clone + Send + Sync> Sampler<Item> for FixedSampler<Item> {
    fn ready(&self, _state: &SamplingState<Item>, _rng: &mut dyn RngCore) -> bool {
        true
    }

    fn sample(&self, _state: &SamplingState<Item>, _rng: &mut dyn RngCore) -> SamplingResult<Sample<Item>> {
        Ok(Sample::new(self.value.clone(), FIXED_SAMPLER_NAME))
    }
}

// ==================== Never ====================

/// Never ready
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverSampler;

impl<Item> Sampler<Item> for NeverSampler {
    fn ready(&self, _state: &SamplingState<Item>, _rng: &mut dyn RngCore) -> bool {
        false
    }

    fn sample(&self, _state: &SamplingState<Item>, _rng: &mut dyn RngCore) -> SamplingResult<Sample<Item>> {
        Err(SamplingError::not_ready("never"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemAndWeightState, SinceLast, WeightState};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    fn seen_state() -> WeightState {
        WeightState {
            total_occurrences: 1,
            items_since_last_occurrence: SinceLast::Ago(1),
            duration_since_last_occurrence: SinceLast::Ago(Duration::from_secs(5)),
            occurrence_days: 1,
            occurrence_days_since_last_hint_or_dnf: None,
            badness_average: Some(Duration::from_secs(3)),
        }
    }

    fn state(items: &[(&'static str, WeightState)], next: Option<&'static str>) -> SamplingState<&'static str> {
        SamplingState::new(
            items
                .iter()
                .map(|(item, s)| ItemAndWeightState::new(*item, s.clone()))
                .collect(),
            next,
        )
    }

    #[test]
    fn test_new_sampler_ready_with_new_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampling_state = state(&[("picked", WeightState::fresh())], None);
        assert!(NewSampler::new("new").ready(&sampling_state, &mut rng));
    }

    #[test]
    fn test_new_sampler_not_ready_if_only_new_item_is_next() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampling_state = state(&[("next", WeightState::fresh())], Some("next"));
        let sampler = NewSampler::new("new");
        assert!(!sampler.ready(&sampling_state, &mut rng));
        assert_eq!(
            sampler.sample(&sampling_state, &mut rng),
            Err(SamplingError::not_ready("new"))
        );
    }

    #[test]
    fn test_new_sampler_not_ready_with_only_seen_items() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampling_state = state(&[("picked", seen_state())], None);
        assert!(!NewSampler::new("new").ready(&sampling_state, &mut rng));
    }

    #[test]
    fn test_new_sampler_picks_first_new_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampling_state = state(
            &[("picked", WeightState::fresh()), ("unpicked", WeightState::fresh())],
            None,
        );
        let sample = NewSampler::new("new").sample(&sampling_state, &mut rng).unwrap();
        assert_eq!(sample, Sample::new("picked", "new"));
    }

    #[test]
    fn test_new_sampler_skips_seen_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampling_state = state(&[("seen", seen_state()), ("picked", WeightState::fresh())], None);
        let sample = NewSampler::new("new").sample(&sampling_state, &mut rng).unwrap();
        assert_eq!(sample.item, "picked");
    }

    #[test]
    fn test_new_sampler_skips_next_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampling_state = state(
            &[("next", WeightState::fresh()), ("picked", WeightState::fresh())],
            Some("next"),
        );
        let sample = NewSampler::new("new").sample(&sampling_state, &mut rng).unwrap();
        assert_eq!(sample.item, "picked");
    }

    #[test]
    fn test_fixed_sampler() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampling_state: SamplingState<u32> = SamplingState::new(Vec::new(), None);
        let sampler = FixedSampler::new(7u32);
        assert!(sampler.ready(&sampling_state, &mut rng));
        assert_eq!(sampler.sample(&sampling_state, &mut rng), Ok(Sample::new(7, "fixed")));
    }

    #[test]
    fn test_never_sampler() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sampling_state = state(&[("a", WeightState::fresh())], None);
        assert!(!Sampler::<&str>::ready(&NeverSampler, &sampling_state, &mut rng));
        assert!(Sampler::<&str>::sample(&NeverSampler, &sampling_state, &mut rng).is_err());
    }
}
