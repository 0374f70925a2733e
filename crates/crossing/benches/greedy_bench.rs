//! Criterion benchmarks for the greedy crossing schedule.
//! Focus sizes: n in {4, 16, 64, 256}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use crossing::prelude::*;

fn roster_of(n: usize, seed: u64) -> Roster {
    let cfg = RosterCfg {
        min_people: n,
        max_people: n,
        ..RosterCfg::default()
    };
    draw_roster(cfg, ReplayToken { seed, index: 0 })
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("solve", n), &n, |b, &n| {
            b.iter_batched(
                || roster_of(n, 11).into_state().unwrap(),
                |state| {
                    let _log = GreedyStrategy.solve(&state).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("total_time", n), &n, |b, &n| {
            let log = GreedyStrategy.solve(&roster_of(n, 12).into_state().unwrap()).unwrap();
            b.iter(|| log.total_time())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_greedy);
criterion_main!(benches);
