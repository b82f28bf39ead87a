//! Criterion benchmarks for the orientation predicate.
//! Inputs: random triples (mostly Left/Right) and collinear triples (all
//! the tie-break branches).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geoprim::orient::{area_triangle_2d, orientation_2d};
use geoprim::sample::{sample_collinear, sample_triple, ReplayToken, SampleCfg};

fn bench_orient(c: &mut Criterion) {
    let cfg = SampleCfg::default();
    let mut group = c.benchmark_group("orient");
    for &n in &[16usize, 256, 4096] {
        let generic: Vec<_> = (0..n as u64)
            .map(|index| sample_triple(cfg, ReplayToken { seed: 43, index }))
            .collect();
        group.bench_with_input(BenchmarkId::new("orientation_generic", n), &generic, |b, tris| {
            b.iter(|| {
                tris.iter()
                    .filter_map(|[a, bb, cc]| orientation_2d(*a, *bb, *cc).ok())
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("area_generic", n), &generic, |b, tris| {
            b.iter(|| {
                tris.iter()
                    .map(|[a, bb, cc]| area_triangle_2d(*a, *bb, *cc))
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("orientation_collinear", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    (0..n as u64)
                        .filter_map(|index| sample_collinear(cfg, ReplayToken { seed: 44, index }))
                        .collect::<Vec<_>>()
                },
                |samples| {
                    for s in samples {
                        let _ = orientation_2d(s.a, s.b, s.c);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_orient);
criterion_main!(benches);
