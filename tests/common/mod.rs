#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use drill_sampling::{ItemAndWeightState, SamplingState, SinceLast, WeightState};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

pub fn new_state() -> WeightState {
    WeightState::fresh()
}

/// Seen once, `items_since` items ago, an hour ago
pub fn seen_state(items_since: u64) -> WeightState {
    WeightState {
        total_occurrences: 1,
        items_since_last_occurrence: SinceLast::Ago(items_since),
        duration_since_last_occurrence: SinceLast::Ago(Duration::from_secs(3600)),
        occurrence_days: 1,
        occurrence_days_since_last_hint_or_dnf: None,
        badness_average: Some(Duration::from_secs(3)),
    }
}

pub fn case_pool(states: Vec<WeightState>) -> SamplingState<String> {
    SamplingState::new(
        states
            .into_iter()
            .enumerate()
            .map(|(i, state)| ItemAndWeightState::new(format!("case-{}", i), state))
            .collect(),
        None,
    )
}
