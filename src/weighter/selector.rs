//! Selectors
//!
//! Binary weighters: an item weighs 1 if it is due for review and 0 otherwise.
//! Every selector here is a thin parameterization of
//! [`select_with_exponential_backoff`].

use rand::RngCore;

use super::Weighter;
use crate::backoff::select_with_exponential_backoff;
use crate::error::SamplingResult;
use crate::sanitize::check_positive;
use crate::types::WeightState;

/// Boolean decision whether an item is due
pub trait Selector: Send + Sync {
    fn select(&self, state: &WeightState, rng: &mut dyn RngCore) -> bool;
}

/// Weight of a selection decision
pub fn selection_weight(selected: bool) -> f64 {
    if selected {
        1.0
    } else {
        0.0
    }
}

macro_rules! selector_weighter {
    ($($selector:ty),+ $(,)?) => {
        $(
            impl Weighter for $selector {
                fn weight(&self, state: &WeightState, rng: &mut dyn RngCore) -> f64 {
                    selection_weight(self.select(state, rng))
                }
            }
        )+
    };
}

selector_weighter!(RepeatWeighter, RevisitWeighter, ForgottenWeighter);

// ==================== Repeat ====================

/// Due after `base^total_occurrences` other items
#[derive(Clone, Copy, Debug)]
pub struct RepeatWeighter {
    base: f64,
}

impl RepeatWeighter {
    pub fn new(base: f64) -> SamplingResult<Self> {
        Ok(Self {
            base: check_positive("repeat backoff base", base)?,
        })
    }
}

impl Selector for RepeatWeighter {
    fn select(&self, state: &WeightState, rng: &mut dyn RngCore) -> bool {
        select_with_exponential_backoff(
            self.base,
            state.total_occurrences,
            state.items_since_last_occurrence.as_f64(),
            None,
            rng,
        )
    }
}

// ==================== Revisit ====================

/// Due after `base^occurrence_days` days
#[derive(Clone, Copy, Debug)]
pub struct RevisitWeighter {
    base: f64,
}

impl RevisitWeighter {
    pub fn new(base: f64) -> SamplingResult<Self> {
        Ok(Self {
            base: check_positive("revisit backoff base", base)?,
        })
    }
}

impl Selector for RevisitWeighter {
    fn select(&self, state: &WeightState, rng: &mut dyn RngCore) -> bool {
        select_with_exponential_backoff(
            self.base,
            state.occurrence_days,
            state.duration_since_last_occurrence.as_days(),
            None,
            rng,
        )
    }
}

// ==================== Forgotten ====================

/// Revisits items that needed a hint or were failed, backing off by the
/// number of days they occurred on since, up to `max_repetitions`.
#[derive(Clone, Copy, Debug)]
pub struct ForgottenWeighter {
    base: f64,
    max_repetitions: u64,
}

impl ForgottenWeighter {
    pub fn new(base: f64, max_repetitions: u64) -> SamplingResult<Self> {
        Ok(Self {
            base: check_positive("forgotten backoff base", base)?,
            max_repetitions,
        })
    }
}

impl Selector for ForgottenWeighter {
    fn select(&self, state: &WeightState, rng: &mut dyn RngCore) -> bool {
        let Some(days_since_hint_or_dnf) = state.occurrence_days_since_last_hint_or_dnf else {
            return false;
        };
        select_with_exponential_backoff(
            self.base,
            days_since_hint_or_dnf,
            state.duration_since_last_occurrence.as_days(),
            Some(self.max_repetitions),
            rng,
        )
    }
}
