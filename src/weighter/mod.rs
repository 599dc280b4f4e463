//! Weighters
//!
//! Stateless scoring functions that turn one item's history into a
//! non-negative priority. Higher weights are more likely to be drawn,
//! a weight of zero excludes the item from weighted draws.
//!
//! - [`UniformWeighter`] - every item weighs 1
//! - [`FixedWeighter`] - every item weighs a constant
//! - [`BadnessWeighter`] - exponential penalty for items solved slower than the goal
//! - [`ManyItemsNotSeenWeighter`] - favours items that have not been seen for many items
//! - [`selector`] - binary weighters built on exponential backoff

pub mod selector;

use rand::RngCore;
use std::time::Duration;

use crate::error::SamplingResult;
use crate::sanitize::{check_non_negative, check_positive};
use crate::types::WeightState;

pub use selector::{ForgottenWeighter, RepeatWeighter, RevisitWeighter, Selector};

/// Scoring function for one item's weight state.
///
/// Implementations may consume randomness but must not hold mutable state.
pub trait Weighter: Send + Sync {
    fn weight(&self, state: &WeightState, rng: &mut dyn RngCore) -> f64;
}

// ==================== Uniform ====================

#[derive(Clone, Copy, Debug, Default)]
pub struct UniformWeighter;

impl Weighter for UniformWeighter {
    fn weight(&self, _state: &WeightState, _rng: &mut dyn RngCore) -> f64 {
        1.0
    }
}

// ==================== Fixed ====================

/// Constant weight, intended for tests and debugging
#[derive(Clone, Copy, Debug)]
pub struct FixedWeighter {
    value: f64,
}

impl FixedWeighter {
    pub fn new(value: f64) -> SamplingResult<Self> {
        Ok(Self {
            value: check_non_negative("fixed weight", value)?,
        })
    }
}

impl Weighter for FixedWeighter {
    fn weight(&self, _state: &WeightState, _rng: &mut dyn RngCore) -> f64 {
        self.value
    }
}

// ==================== Badness ====================

/// Penalizes items whose rolling average is slower than the goal.
///
/// weight = base ^ ((average - goal) / goal), or 0 if the item was never
/// solved or is at least as fast as the goal.
#[derive(Clone, Copy, Debug)]
pub struct BadnessWeighter {
    goal_badness: Duration,
    base: f64,
}

impl BadnessWeighter {
    pub fn new(goal_badness: Duration, base: f64) -> SamplingResult<Self> {
        check_positive("goal badness", goal_badness.as_secs_f64())?;
        Ok(Self {
            goal_badness,
            base: check_positive("badness base", base)?,
        })
    }
}

impl Weighter for BadnessWeighter {
    fn weight(&self, state: &WeightState, _rng: &mut dyn RngCore) -> f64 {
        match state.badness_average {
            Some(average) if average > self.goal_badness => {
                let goal = self.goal_badness.as_secs_f64();
                let excess = (average.as_secs_f64() - goal) / goal;
                self.base.powf(excess)
            }
            _ => 0.0,
        }
    }
}

// ==================== Many Items Not Seen ====================

/// weight = items_since_last_occurrence ^ exponent, infinite for never seen items
#[derive(Clone, Copy, Debug)]
pub struct ManyItemsNotSeenWeighter {
    exponent: f64,
}

impl ManyItemsNotSeenWeighter {
    pub fn new(exponent: f64) -> SamplingResult<Self> {
        Ok(Self {
            exponent: check_non_negative("many items not seen exponent", exponent)?,
        })
    }
}

impl Weighter for ManyItemsNotSeenWeighter {
    fn weight(&self, state: &WeightState, _rng: &mut dyn RngCore) -> f64 {
        state.items_since_last_occurrence.as_f64().powf(self.exponent)
    }
}
