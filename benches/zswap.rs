//! Swap Benchmarks
//!
//! Compares the contiguous fast path (SIMD kernel selected at build time)
//! against the scalar pairwise loop and against the strided general path,
//! across sizes spanning the cache hierarchy.
//!
//! Note: one complex element is 16 bytes and both vectors are touched, so
//! 65_536 elements move 2 MiB per call.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zswap::simd::scalar;
use zswap::{zswap, zswap_view, Complex64};

const VECTOR_SIZES: &[usize] = &[
    256,       // 8 KiB - L1 cache
    4_096,     // 128 KiB - L2 cache
    65_536,    // 2 MiB - L2→L3 transition
    1_048_576, // 32 MiB - Main memory
];

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<Complex64> {
    (0..len)
        .map(|_| Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect()
}

fn bench_contiguous(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut group = c.benchmark_group("zswap_contiguous");

    for &size in VECTOR_SIZES {
        let mut x = random_vec(&mut rng, size);
        let mut y = random_vec(&mut rng, size);

        group.throughput(Throughput::Bytes((2 * size * 16) as u64));

        group.bench_with_input(BenchmarkId::new("simd", size), &size, |b, &n| {
            b.iter(|| zswap(black_box(n as isize), &mut x, 1, &mut y, 1));
        });

        group.bench_with_input(BenchmarkId::new("scalar", size), &size, |b, &n| {
            b.iter(|| unsafe {
                scalar::swap_slots(
                    black_box(x.as_mut_ptr().cast::<f64>()),
                    black_box(y.as_mut_ptr().cast::<f64>()),
                    2 * n,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("std_swap_with_slice", size), &size, |b, &n| {
            b.iter(|| x[..n].swap_with_slice(black_box(&mut y[..n])));
        });
    }

    group.finish();
}

fn bench_strided(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(54321);
    let mut group = c.benchmark_group("zswap_strided");

    for &size in VECTOR_SIZES {
        let mut x = random_vec(&mut rng, 2 * size);
        let mut y = random_vec(&mut rng, size);

        group.throughput(Throughput::Bytes((2 * size * 16) as u64));

        group.bench_with_input(BenchmarkId::new("incx=2,incy=1", size), &size, |b, &n| {
            b.iter(|| zswap(black_box(n as isize), &mut x, 2, &mut y, 1));
        });

        group.bench_with_input(BenchmarkId::new("incx=-2,incy=-1", size), &size, |b, &n| {
            b.iter(|| zswap(black_box(n as isize), &mut x, -2, &mut y, -1));
        });

        group.bench_with_input(BenchmarkId::new("incx=1,incy=-1", size), &size, |b, &n| {
            b.iter(|| zswap(black_box(n as isize), &mut x[..n], 1, &mut y, -1));
        });
    }

    group.finish();
}

fn bench_ndarray_view(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(777);
    let mut group = c.benchmark_group("zswap_view");

    for &size in VECTOR_SIZES {
        let mut x = ndarray::Array1::from(random_vec(&mut rng, size));
        let mut y = ndarray::Array1::from(random_vec(&mut rng, size));

        group.throughput(Throughput::Bytes((2 * size * 16) as u64));

        group.bench_with_input(BenchmarkId::new("reversed", size), &size, |b, _| {
            b.iter(|| zswap_view(&mut x.slice_mut(ndarray::s![..;-1]), &mut y));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contiguous, bench_strided, bench_ndarray_view);
criterion_main!(benches);
