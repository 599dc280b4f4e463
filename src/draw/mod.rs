//! Weighted Draw
//!
//! Picks one element from a weighted set with probability `weight / Σweight`.
//! Zero-weight elements are never picked.

use rand::{Rng, RngCore};

use crate::error::{SamplingError, SamplingResult};
use crate::sanitize::check_draw_weight;

/// A value paired with its draw weight
#[derive(Clone, Debug, PartialEq)]
pub struct Weighted<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Draw one value proportionally to its weight.
///
/// Fails with [`SamplingError::ZeroTotalWeight`] if the weights sum to zero
/// (including an empty input) and with [`SamplingError::InvalidWeight`] on a
/// negative or NaN weight. Infinite weights dominate: the draw is then
/// uniform among the infinitely weighted values. Finite weights whose sum
/// overflows are rescaled by the largest weight before drawing.
pub fn weighted_draw<T>(items: Vec<Weighted<T>>, rng: &mut dyn RngCore) -> SamplingResult<T> {
    let mut total = 0.0;
    let mut max_weight: f64 = 0.0;
    let mut infinite = 0usize;
    for item in &items {
        let weight = check_draw_weight(item.weight)?;
        if weight.is_infinite() {
            infinite += 1;
        } else {
            total += weight;
            max_weight = max_weight.max(weight);
        }
    }

    if infinite > 0 {
        let pick = rng.gen_range(0..infinite);
        return items
            .into_iter()
            .filter(|item| item.weight.is_infinite())
            .nth(pick)
            .map(|item| item.value)
            .ok_or(SamplingError::ZeroTotalWeight);
    }

    if total == 0.0 {
        return Err(SamplingError::ZeroTotalWeight);
    }

    let scale = if total.is_finite() { 1.0 } else { max_weight.recip() };
    if scale != 1.0 {
        total = items.iter().map(|item| item.weight * scale).sum();
    }

    let r = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for item in items {
        if item.weight == 0.0 {
            continue;
        }
        cumulative += item.weight * scale;
        if cumulative >= r {
            return Ok(item.value);
        }
        last_positive = Some(item.value);
    }

    // Only reachable through floating point rounding of the running sum
    last_positive.ok_or(SamplingError::ZeroTotalWeight)
}
