//! Benchmarks for determinants, inverses and solving.

use criterion::measurement::WallTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion};

use tessera_linalg::{solve_batch, AugmentedSystem, BatchConfig, Determinant, FixedVector, Matrix};

/// Generates a diagonally dominant (non-singular) matrix.
fn dominant<const N: usize>() -> Matrix<f64, N, N> {
    Matrix::from_fn(|x, y| {
        if x == y {
            (N + 1) as f64
        } else {
            ((x * 7 + y * 3) % 5) as f64 / 5.0
        }
    })
}

fn rhs<const N: usize>() -> FixedVector<f64, N> {
    FixedVector::from_fn(|i| i as f64 - 1.0)
}

fn bench_size<const N: usize>(group: &mut BenchmarkGroup<'_, WallTime>)
where
    Matrix<f64, N, N>: Determinant<Scalar = f64>,
{
    let m = dominant::<N>();
    let system = AugmentedSystem::new(m, rhs::<N>());

    group.bench_with_input(BenchmarkId::new("det", N), &m, |b, m| {
        b.iter(|| black_box(m.det()));
    });
    group.bench_with_input(BenchmarkId::new("inverse_adjoint", N), &m, |b, m| {
        b.iter(|| black_box(m.inverse_adjoint()));
    });
    group.bench_with_input(BenchmarkId::new("inverse_gaussian", N), &m, |b, m| {
        b.iter(|| black_box(m.inverse_gaussian()));
    });
    group.bench_with_input(BenchmarkId::new("solve", N), &system, |b, s| {
        b.iter(|| black_box(s.solve()));
    });
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    bench_size::<2>(&mut group);
    bench_size::<3>(&mut group);
    bench_size::<4>(&mut group);
    bench_size::<6>(&mut group);
    bench_size::<8>(&mut group);

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_batch");
    let config = BatchConfig::default();

    for size in [16, 256, 4096] {
        let systems: Vec<_> = (0..size)
            .map(|_| AugmentedSystem::new(dominant::<4>(), rhs::<4>()))
            .collect();

        group.bench_with_input(BenchmarkId::new("4x4", size), &systems, |b, systems| {
            b.iter(|| black_box(solve_batch(systems, &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_batch);
criterion_main!(benches);
