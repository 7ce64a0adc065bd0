//! Criterion benchmarks for the naive and blocked kernels.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tilebench::matrix::Matrix;
use tilebench::matrix::generate::{generate_pattern, generate_zeros};
use tilebench::{BLOCK_SIZE, multiply_blocked, multiply_naive};

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_matmul");
    group.sample_size(10);

    for size in [128, 256, 512] {
        let mut y = Matrix::<f64>::new(size);
        let mut z = Matrix::<f64>::new(size);
        generate_pattern(&mut y);
        generate_pattern(&mut z);
        let mut x = Matrix::<f64>::new(size);

        group.throughput(Throughput::Elements(2 * (size as u64).pow(3)));

        group.bench_with_input(BenchmarkId::new("naive_ijk", size), &size, |b, _| {
            b.iter(|| {
                generate_zeros(&mut x);
                multiply_naive(&mut x, black_box(&y), black_box(&z));
            })
        });

        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |b, _| {
            b.iter(|| {
                generate_zeros(&mut x);
                multiply_blocked(&mut x, black_box(&y), black_box(&z), BLOCK_SIZE);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
