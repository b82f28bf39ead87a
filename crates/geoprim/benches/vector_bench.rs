//! Criterion benchmarks for vector primitives (f32 and f64, 2D and 3D).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geoprim::cross::{cross_product_2d, cross_product_3d};
use geoprim::vector::{Vector2f, Vector3d, Vector3f};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_vector(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let a3 = Vector3f::xyz(rng.gen(), rng.gen(), rng.gen());
    let b3 = Vector3f::xyz(rng.gen(), rng.gen(), rng.gen());
    let a2 = Vector2f::xy(rng.gen(), rng.gen());
    let b2 = Vector2f::xy(rng.gen(), rng.gen());
    let d3 = Vector3d::xyz(rng.gen(), rng.gen(), rng.gen());

    let mut group = c.benchmark_group("vector");
    group.bench_function("add_sub_3f", |b| b.iter(|| black_box(a3) + black_box(b3) - black_box(a3)));
    group.bench_function("dot_3f", |b| b.iter(|| black_box(a3).dot(&black_box(b3))));
    group.bench_function("cross_2f", |b| b.iter(|| cross_product_2d(black_box(a2), black_box(b2))));
    group.bench_function("cross_3f", |b| b.iter(|| cross_product_3d(black_box(a3), black_box(b3))));
    group.bench_function("normalized_3d", |b| b.iter(|| black_box(d3).normalized()));
    group.bench_function("eq_3f", |b| b.iter(|| black_box(a3) == black_box(b3)));
    group.finish();
}

criterion_group!(benches, bench_vector);
criterion_main!(benches);
