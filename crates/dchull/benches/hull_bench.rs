//! Criterion benchmarks for the divide-and-conquer hull.
//! Focus sizes: n in {100, 1_000, 10_000, 100_000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p dchull

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dchull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::reference::convex_hull_cw;
use dchull::{build_hull, HullArena};

fn cloud(count: usize, shape: CloudShape, seed: u64) -> HullArena {
    let pts = draw_cloud(CloudCfg { count, shape }, ReplayToken { seed, index: 0 });
    HullArena::from_unsorted(pts)
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("dc_square", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Square { half: 1.0 }, 43),
                |mut arena| {
                    let _hull = build_hull(&mut arena).unwrap();
                },
                BatchSize::LargeInput,
            )
        });

        // Every point on the hull: no discards, longest tangent walks.
        group.bench_with_input(BenchmarkId::new("dc_circle", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Circle { radius: 1.0 }, 44),
                |mut arena| {
                    let _hull = build_hull(&mut arena).unwrap();
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("monotone_chain", n), &n, |b, &n| {
            let pts = draw_cloud(
                CloudCfg {
                    count: n,
                    shape: CloudShape::Square { half: 1.0 },
                },
                ReplayToken { seed: 43, index: 0 },
            );
            b.iter(|| convex_hull_cw(&pts))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
