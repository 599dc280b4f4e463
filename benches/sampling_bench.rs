//! Benchmark suite for drill-sampling
//!
//! Run with: cargo bench

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drill_sampling::{
    weighted_draw, ItemAndWeightState, Sampler, SamplingConfig, SamplingState, SinceLast,
    WeightState, Weighted,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn pool(size: usize) -> SamplingState<usize> {
    SamplingState::new(
        (0..size)
            .map(|i| {
                let state = if i % 10 == 0 {
                    WeightState::fresh()
                } else {
                    WeightState {
                        total_occurrences: (i % 7) as u64 + 1,
                        items_since_last_occurrence: SinceLast::Ago((i % 150) as u64),
                        duration_since_last_occurrence: SinceLast::Ago(Duration::from_secs(i as u64 * 600)),
                        occurrence_days: (i % 5) as u64 + 1,
                        occurrence_days_since_last_hint_or_dnf: (i % 13 == 0).then_some(1),
                        badness_average: Some(Duration::from_millis(2000 + (i as u64 * 37) % 8000)),
                    }
                };
                ItemAndWeightState::new(i, state)
            })
            .collect(),
        None,
    )
}

fn bench_weighted_draw(c: &mut Criterion) {
    let sizes = [10, 100, 1000];
    let mut group = c.benchmark_group("weighted_draw");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in sizes {
        let weights: Vec<f64> = (0..size).map(|i| (i % 5) as f64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let items: Vec<Weighted<usize>> = weights
                    .iter()
                    .enumerate()
                    .map(|(i, w)| Weighted::new(i, *w))
                    .collect();
                black_box(weighted_draw(items, &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_training_sampler(c: &mut Criterion) {
    let sizes = [20, 200, 2000];
    let mut group = c.benchmark_group("training_sampler");
    let config = SamplingConfig::for_training_session(Some(Duration::from_secs(5)), false)
        .expect("valid preset");
    let sampler = config.build_sampler::<usize>().expect("valid sampler");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in sizes {
        let state = pool(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(sampler.sample(&state, &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_weighted_draw, bench_training_sampler);
criterion_main!(benches);
