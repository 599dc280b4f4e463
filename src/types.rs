//! Common Types and Constants
//!
//! Shared data structures handed to every weighter and sampler.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ==================== Constants ====================

/// Distortion factor applied to every repetition index
pub const REPETITION_DISTORTION_FACTOR: f64 = 0.2;

/// Minimum repetition index: at least one other item (or day) must come in between
pub const MIN_REPETITION_INDEX: f64 = 1.0;

/// Seconds per calendar day, used to turn elapsed durations into fractional days
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sampler name reported by [`crate::sampler::FixedSampler`]
pub const FIXED_SAMPLER_NAME: &str = "fixed";

// ==================== Since Last Occurrence ====================

/// Distance since the last occurrence of an item.
///
/// `Never` orders above every `Ago` value and stands in for +∞.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SinceLast<T> {
    /// The item last occurred this far back
    Ago(T),
    /// The item has never occurred
    #[default]
    Never,
}

impl<T> SinceLast<T> {
    pub fn is_never(&self) -> bool {
        matches!(self, SinceLast::Never)
    }

    pub fn ago(&self) -> Option<&T> {
        match self {
            SinceLast::Ago(value) => Some(value),
            SinceLast::Never => None,
        }
    }
}

impl SinceLast<u64> {
    /// Count as a float, `f64::INFINITY` if never seen
    pub fn as_f64(&self) -> f64 {
        self.ago().map_or(f64::INFINITY, |count| *count as f64)
    }
}

impl SinceLast<Duration> {
    /// Elapsed time in fractional days, `f64::INFINITY` if never seen
    pub fn as_days(&self) -> f64 {
        self.ago()
            .map_or(f64::INFINITY, |elapsed| elapsed.as_secs_f64() / SECONDS_PER_DAY)
    }
}

// ==================== Weight State ====================

/// Practice history summary of one item at the time of a sampling request
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightState {
    /// How many times the item has ever been presented
    pub total_occurrences: u64,
    /// Number of other items presented since this one last appeared
    pub items_since_last_occurrence: SinceLast<u64>,
    /// Wall-clock time since the last occurrence
    pub duration_since_last_occurrence: SinceLast<Duration>,
    /// Number of distinct calendar days the item occurred on
    pub occurrence_days: u64,
    /// Occurrence days since the last hint or DNF, absent if the item never needed either
    #[serde(default)]
    pub occurrence_days_since_last_hint_or_dnf: Option<u64>,
    /// Rolling average solve time, absent if never solved
    #[serde(default)]
    pub badness_average: Option<Duration>,
}

impl WeightState {
    /// State of an item that has never been presented
    pub fn fresh() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.total_occurrences == 0
    }
}

/// An opaque item paired with its weight state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemAndWeightState<Item> {
    pub item: Item,
    pub state: WeightState,
}

impl<Item> ItemAndWeightState<Item> {
    pub fn new(item: Item, state: WeightState) -> Self {
        Self { item, state }
    }
}

// ==================== Sampling State ====================

/// Immutable snapshot handed to a sampler for one request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingState<Item> {
    /// Items in the order they were introduced into the pool
    pub weight_states: Vec<ItemAndWeightState<Item>>,
    /// Item already queued to appear next
    pub next_item: Option<Item>,
}

impl<Item> SamplingState<Item> {
    pub fn new(weight_states: Vec<ItemAndWeightState<Item>>, next_item: Option<Item>) -> Self {
        Self {
            weight_states,
            next_item,
        }
    }

    pub fn len(&self) -> usize {
        self.weight_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weight_states.is_empty()
    }
}

impl<Item: PartialEq> SamplingState<Item> {
    /// Whether `item` is the one already queued to appear next
    pub fn is_next_item(&self, item: &Item) -> bool {
        self.next_item.as_ref() == Some(item)
    }
}

// ==================== Sample ====================

/// Result of a sampling request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample<Item> {
    /// The chosen item
    pub item: Item,
    /// Name of the strategy that produced it, for diagnostics only
    pub sampler_name: String,
}

impl<Item> Sample<Item> {
    pub fn new(item: Item, sampler_name: impl Into<String>) -> Self {
        Self {
            item,
            sampler_name: sampler_name.into(),
        }
    }
}

// ==================== Tests ====================
