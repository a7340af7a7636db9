use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linsys::*;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;

const RHS_COLUMNS: usize = 8;

fn xrng() -> impl Rng {
    Xoshiro256PlusPlus::seed_from_u64(0x5eed)
}

fn random_matrix(rng: &mut impl Rng, m: usize, n: usize) -> Matrix {
    let rows: Vec<Vec<f64>> = (0..m)
        .map(|_| (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect();
    Matrix::from_real(&rows).expect("non-empty rows")
}

/// 1. IN-PLACE RREF (scaling test with square sizes)
fn bench_to_rref(c: &mut Criterion) {
    let mut group = c.benchmark_group("rref/to_rref");
    let mut rng = xrng();

    for &size in &[4, 16, 64] {
        let a = random_matrix(&mut rng, size, size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("square", size), &a, |b, a| {
            b.iter(|| {
                let mut work = a.clone();
                work.to_rref().expect("random column 1 is nonzero");
                black_box(work)
            })
        });
    }
    group.finish();
}

/// 2. RANK + CONSISTENCY on augmented systems
fn bench_structure(c: &mut Criterion) {
    let mut rng = xrng();
    let mut a = random_matrix(&mut rng, 32, 24);
    let b: Vec<f64> = (0..32).map(|_| rng.gen_range(-10.0..10.0)).collect();
    a.augment_with(&Vector::from_real(&b).expect("non-empty"))
        .expect("matching rows");

    c.bench_function("rref/rank_augmented_32x24", |bench| {
        bench.iter(|| black_box(black_box(&a).rank()))
    });
    c.bench_function("rref/is_consistent_32x24", |bench| {
        bench.iter(|| black_box(black_box(&a).is_consistent()))
    });
}

/// 3. BATCHED MULTI-RHS REDUCTION
fn bench_super_augmented(c: &mut Criterion) {
    let mut group = c.benchmark_group("rref/super_augmented");
    let mut rng = xrng();

    for &size in &[8, 32] {
        let lhs = random_matrix(&mut rng, size, size);
        let rhs = random_matrix(&mut rng, size, RHS_COLUMNS);
        let sam = SuperAugmentedMatrix::new(lhs, rhs).expect("same row count");
        group.throughput(Throughput::Elements(RHS_COLUMNS as u64));
        group.bench_with_input(BenchmarkId::new("columns", size), &sam, |b, sam| {
            b.iter(|| {
                let mut work = sam.clone();
                work.to_rref().expect("random column 1 is nonzero");
                black_box(work)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_to_rref, bench_structure, bench_super_augmented);
criterion_main!(benches);
