use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::DMatrix;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;
use shape_icc::{IccEstimator, MeasurementMatrix, ReplicateSet, ShapeStack};

fn ratings(rng: &mut Xoshiro256PlusPlus, n: usize, k: usize) -> MeasurementMatrix {
    let noise = Normal::new(0.0, 1.0).unwrap();
    let data = DMatrix::from_fn(n, k, |i, _| i as f64 + noise.sample(rng));
    MeasurementMatrix::new(data).unwrap()
}

fn disks(side: usize, n: usize, k: usize, seed: u64) -> ShapeStack {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let jitter = Normal::new(0.0, 0.5).unwrap();
    let radii: Vec<f64> = (0..n * k)
        .map(|d| (d / k) as f64 * 0.5 + side as f64 / 6.0 + jitter.sample(&mut rng))
        .collect();
    let centre = side as f64 / 2.0;
    ShapeStack::from_fn(&[side, side], n, k, |p, i, j| {
        let (row, col) = ((p / side) as f64, (p % side) as f64);
        let r = ((row - centre).powi(2) + (col - centre).powi(2)).sqrt();
        if r <= radii[i * k + j] {
            1.0
        } else {
            0.0
        }
    })
    .unwrap()
}

fn bench_scalar(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let small = ratings(&mut rng, 30, 4);
    let large = ratings(&mut rng, 5000, 8);
    let estimator = IccEstimator::new();

    let mut group = c.benchmark_group("scalar_icc");
    group.bench_function("analyze_30x4", |b| {
        b.iter(|| black_box(estimator.analyze(black_box(&small)).unwrap()))
    });
    group.bench_function("analyze_5000x8", |b| {
        b.iter(|| black_box(estimator.analyze(black_box(&large)).unwrap()))
    });
    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let stack = disks(64, 20, 3, 2);
    let replicates = ReplicateSet::new((0..8).map(|r| disks(32, 10, 3, 100 + r)).collect()).unwrap();
    let estimator = IccEstimator::new();

    let mut group = c.benchmark_group("shape_icc");
    group.sample_size(20);
    group.bench_function("analyze_64x64_20x3", |b| {
        b.iter(|| black_box(estimator.analyze(black_box(&stack)).unwrap()))
    });
    group.bench_function("replicates_8", |b| {
        b.iter(|| black_box(estimator.analyze_replicates(black_box(&replicates)).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_scalar, bench_shapes);
criterion_main!(benches);
