//! # drill-sampling - adaptive item selection for drill training
//!
//! Decides which single item (a cube case) to present next in a
//! spaced-repetition training session, given a summary of each item's
//! practice history.
//!
//! ## Module structure
//!
//! - [`types`] - weight state, sampling state, and samples
//! - [`backoff`] - distortion and the exponential backoff due test
//! - [`weighter`] - scoring functions and binary selectors
//! - [`draw`] - weighted draw
//! - [`sampler`] - composable sampling strategies
//! - [`scheduler`] - sampler plus owned, seedable RNG
//! - [`config`] - sampling configuration and the training sampler factory
//! - [`sanitize`] - parameter validation
//! - [`error`] - error types
//!
//! Everything is a pure function of the state handed in. Randomness is
//! always injected, so seeded generators make every decision reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use drill_sampling::{
//!     CombinedSampler, ItemAndWeightState, NewSampler, SamplingState, Scheduler,
//!     UniformWeighter, WeightState, WeightedSampler,
//! };
//!
//! let sampler = CombinedSampler::default()
//!     .with(NewSampler::new("new"), 10.0)?
//!     .with(WeightedSampler::new("uniform", UniformWeighter, 1), 1.0)?;
//! let mut scheduler = Scheduler::with_seed(sampler, 42);
//!
//! let state = SamplingState::new(
//!     vec![ItemAndWeightState::new("UF-UB", WeightState::fresh())],
//!     None,
//! );
//! let sample = scheduler.sample(&state)?;
//! assert_eq!(sample.item, "UF-UB");
//! assert_eq!(sample.sampler_name, "new");
//! # Ok::<(), drill_sampling::SamplingError>(())
//! ```

#![deny(clippy::all)]

// ============================================================================
// Modules
// ============================================================================

pub mod backoff;
pub mod config;
pub mod draw;
pub mod error;
pub mod sampler;
pub mod sanitize;
pub mod scheduler;
pub mod types;
pub mod weighter;

// ============================================================================
// Re-exports
// ============================================================================

pub use backoff::{distort, repetition_index, select_with_exponential_backoff, Distortion};
pub use config::SamplingConfig;
pub use draw::{weighted_draw, Weighted};
pub use error::{ConfigError, SamplingError, SamplingResult};
pub use sampler::{
    BoxedSampler, CombinedEntry, CombinedSampler, FixedSampler, NeverSampler, NewSampler,
    PrioritizedSampler, Sampler, WeightedSampler,
};
pub use scheduler::Scheduler;
pub use types::*;
pub use weighter::{
    BadnessWeighter, FixedWeighter, ForgottenWeighter, ManyItemsNotSeenWeighter, RepeatWeighter,
    RevisitWeighter, Selector, UniformWeighter, Weighter,
};
