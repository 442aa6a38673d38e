use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use proportion_confidence::{agresti_coull_interval, AgrestiCoull, ProportionIntervalEstimator};
use rand::prelude::*;

/// Generate (successes, trials) pairs with trials up to `max_trials`
fn generate_counts(len: usize, max_trials: u64, seed: u64) -> Vec<(u64, u64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let trials = rng.gen_range(1..=max_trials);
            (rng.gen_range(0..=trials), trials)
        })
        .collect()
}

fn bench_agresti_coull(c: &mut Criterion) {
    let mut group = c.benchmark_group("AgrestiCoull");
    let counts = generate_counts(1024, 100_000, 42);

    for level in [0.9, 0.95, 0.99] {
        let estimator = AgrestiCoull::new(level).unwrap();
        group.bench_with_input(BenchmarkId::new("estimator", level), &counts, |b, counts| {
            b.iter(|| {
                for &(k, n) in counts {
                    let _ = black_box(estimator.estimate(black_box(k), black_box(n)));
                }
            })
        });
    }

    group.bench_function("free_function_single", |b| {
        b.iter(|| agresti_coull_interval(black_box(17), black_box(40), black_box(0.95)))
    });

    group.finish();
}

criterion_group!(benches, bench_agresti_coull);
criterion_main!(benches);
