//! Sampling configuration and the training sampler factory.
//!
//! The core weighters and samplers have no built-in defaults; every value
//! below is supplied by the caller, either explicitly, from JSON, or through
//! the [`SamplingConfig::for_training_session`] preset.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::error::{ConfigError, SamplingResult};
use crate::sampler::{
    BoxedSampler, CombinedSampler, NewSampler, PrioritizedSampler, Sampler, WeightedSampler,
};
use crate::sanitize::{check_non_negative, check_positive};
use crate::weighter::{
    BadnessWeighter, ForgottenWeighter, ManyItemsNotSeenWeighter, RepeatWeighter, RevisitWeighter,
    UniformWeighter, Weighter,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingConfig {
    /// Put revisit and repeat selectors in front of everything else
    pub revisit_new_items: bool,
    pub goal_badness: Duration,
    pub badness_base: f64,
    pub new_items_weight: f64,
    pub bad_items_weight: f64,
    pub long_not_seen_items_weight: f64,
    pub forgotten_exponential_backoff_base: f64,
    pub repeat_exponential_backoff_base: f64,
    pub revisit_exponential_backoff_base: f64,
    pub recency_threshold: u64,
    pub long_not_seen_threshold: u64,
    pub forgotten_repetitions: u64,
    pub many_items_not_seen_exponent: f64,
    #[serde(default)]
    pub soften_recency_for_small_pools: bool,
}

impl SamplingConfig {
    /// Values used by the cube trainer for a training session.
    ///
    /// Known sessions (the user already knows the cases) favour new items
    /// more and skip the revisit/repeat layer.
    pub fn for_training_session(goal_badness: Option<Duration>, known: bool) -> Result<Self, ConfigError> {
        let goal_badness = goal_badness.ok_or(ConfigError::MissingGoalBadness)?;
        Ok(Self {
            revisit_new_items: !known,
            goal_badness,
            badness_base: 10.0,
            new_items_weight: if known { 15.0 } else { 4.0 },
            bad_items_weight: 5.0,
            long_not_seen_items_weight: 1.0,
            forgotten_exponential_backoff_base: 2.0,
            repeat_exponential_backoff_base: 2.0,
            revisit_exponential_backoff_base: 2.0,
            recency_threshold: 4,
            long_not_seen_threshold: 100,
            forgotten_repetitions: 5,
            many_items_not_seen_exponent: 2.0,
            soften_recency_for_small_pools: false,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SamplingResult<()> {
        check_positive("goal badness", self.goal_badness.as_secs_f64())?;
        check_positive("badness base", self.badness_base)?;
        check_non_negative("new items weight", self.new_items_weight)?;
        check_non_negative("bad items weight", self.bad_items_weight)?;
        check_non_negative("long not seen items weight", self.long_not_seen_items_weight)?;
        check_positive("forgotten backoff base", self.forgotten_exponential_backoff_base)?;
        check_positive("repeat backoff base", self.repeat_exponential_backoff_base)?;
        check_positive("revisit backoff base", self.revisit_exponential_backoff_base)?;
        check_non_negative("many items not seen exponent", self.many_items_not_seen_exponent)?;
        Ok(())
    }

    fn weighted(&self, name: &str, weighter: impl Weighter + 'static, threshold: u64) -> WeightedSampler {
        let sampler = WeightedSampler::new(name, weighter, threshold);
        if self.soften_recency_for_small_pools {
            sampler.soften_for_small_pools()
        } else {
            sampler
        }
    }

    /// Assemble the training sampler tree:
    ///
    /// ```text
    /// [revisit > repeat >]            (only if revisit_new_items)
    /// forgotten >
    /// combined {
    ///     new:           new_items_weight
    ///     badness > uniform:  bad_items_weight
    ///     long not seen: long_not_seen_items_weight
    /// }
    /// ```
    pub fn build_sampler<Item>(&self) -> SamplingResult<BoxedSampler<Item>>
    where
        Item: Clone + PartialEq + Send + Sync + 'static,
    {
        self.validate()?;

        let badness: PrioritizedSampler<Item> = PrioritizedSampler::default()
            .then(self.weighted(
                "badness",
                BadnessWeighter::new(self.goal_badness, self.badness_base)?,
                self.recency_threshold,
            ))
            .then(self.weighted("uniform", UniformWeighter, self.recency_threshold));

        let combined: CombinedSampler<Item> = CombinedSampler::default()
            .with(NewSampler::new("new"), self.new_items_weight)?
            .with(badness, self.bad_items_weight)?
            .with(
                self.weighted(
                    "long not seen",
                    ManyItemsNotSeenWeighter::new(self.many_items_not_seen_exponent)?,
                    self.long_not_seen_threshold,
                ),
                self.long_not_seen_items_weight,
            )?;

        let core: PrioritizedSampler<Item> = PrioritizedSampler::default()
            .then(self.weighted(
                "forgotten",
                ForgottenWeighter::new(self.forgotten_exponential_backoff_base, self.forgotten_repetitions)?,
                self.recency_threshold,
            ))
            .then(combined);

        info!(
            revisit_new_items = self.revisit_new_items,
            recency_threshold = self.recency_threshold,
            "built training sampler"
        );

        if !self.revisit_new_items {
            return Ok(boxed(core));
        }

        let sampler: PrioritizedSampler<Item> = PrioritizedSampler::default()
            .then(self.weighted(
                "revisit",
                RevisitWeighter::new(self.revisit_exponential_backoff_base)?,
                self.recency_threshold,
            ))
            .then(self.weighted(
                "repeat",
                RepeatWeighter::new(self.repeat_exponential_backoff_base)?,
                self.recency_threshold,
            ))
            .then(core);
        Ok(boxed(sampler))
    }
}

fn boxed<Item>(sampler: impl Sampler<Item> + 'static) -> BoxedSampler<Item> {
    Box::new(sampler)
}
