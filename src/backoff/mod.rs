//! Exponential Backoff
//!
//! Decides whether an item is due for another repetition.
//!
//! Core principles:
//! - The wait after the n-th occurrence grows like `base^n`
//! - Every wait is randomly distorted by ±20% so repetitions never become mechanically periodic
//! - At least one other item (or day) always comes in between
//!
//! The occurrence pair is interpreted by the caller: either
//! (presentation count, items since last presentation) or
//! (days occurred, days since last occurrence).

use rand::{Rng, RngCore};

use crate::error::SamplingResult;
use crate::sanitize::check_distortion_factor;
use crate::types::{MIN_REPETITION_INDEX, REPETITION_DISTORTION_FACTOR};

// ==================== Distortion ====================

/// Bounded random perturbation of a value by a factor in (0, 1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distortion {
    factor: f64,
}

impl Distortion {
    /// Distortion used for every repetition index
    pub const REPETITION: Distortion = Distortion {
        factor: REPETITION_DISTORTION_FACTOR,
    };

    pub fn new(factor: f64) -> SamplingResult<Self> {
        Ok(Self {
            factor: check_distortion_factor(factor)?,
        })
    }

    /// Uniform draw in `[value·(1-factor), value·(1+factor)]`
    pub fn apply(&self, value: f64, rng: &mut dyn RngCore) -> f64 {
        let u: f64 = rng.gen();
        value * (1.0 - self.factor) + self.factor * 2.0 * value * u
    }
}

/// Randomly perturb `value` within `factor`, failing if `factor` is outside (0, 1)
pub fn distort(value: f64, factor: f64, rng: &mut dyn RngCore) -> SamplingResult<f64> {
    Ok(Distortion::new(factor)?.apply(value, rng))
}

// ==================== Backoff ====================

/// How many other items (or days) have to pass before the next repetition.
///
/// Distorted once per call, so repeated evaluations of the same state
/// observe slightly different thresholds.
pub fn repetition_index(base: f64, occurrences: u64, rng: &mut dyn RngCore) -> f64 {
    let index = base.powf(occurrences as f64);
    let distorted = Distortion::REPETITION.apply(index, rng);
    distorted.max(MIN_REPETITION_INDEX)
}

/// Whether an item with `total_occurrences` is due again after
/// `more_recent_other_occurrences` other items (or days).
///
/// Items never seen, or seen more often than `max_occurrences`, are never due.
pub fn select_with_exponential_backoff(
    base: f64,
    total_occurrences: u64,
    more_recent_other_occurrences: f64,
    max_occurrences: Option<u64>,
    rng: &mut dyn RngCore,
) -> bool {
    if total_occurrences == 0 {
        return false;
    }
    if max_occurrences.is_some_and(|max| total_occurrences > max) {
        return false;
    }
    more_recent_other_occurrences > repetition_index(base, total_occurrences, rng)
}
