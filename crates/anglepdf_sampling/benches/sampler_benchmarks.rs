//! Criterion benchmarks for the rejection sampler.
//!
//! Run with: `cargo bench -p anglepdf_sampling`

use anglepdf_core::lookup::ShapeTableHandle;
use anglepdf_sampling::{FriedrichHerschbach, PdfRng, SamplerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_sample_1d_by_sigma(c: &mut Criterion) {
    let sampler = FriedrichHerschbach::new(ShapeTableHandle::bundled());
    let n = 10_000;

    let mut group = c.benchmark_group("fh95_sample_1d");
    group.throughput(Throughput::Elements(n as u64));

    // Acceptance rate approaches sigma^2 as sigma shrinks
    for sigma in [2.0, 0.5, 0.1] {
        group.bench_with_input(BenchmarkId::from_parameter(sigma), &sigma, |b, &sigma| {
            let mut rng = PdfRng::from_seed(42);
            b.iter(|| sampler.sample_1d(black_box(sigma), n, &mut rng).unwrap());
        });
    }
    group.finish();
}

fn bench_batch_size(c: &mut Criterion) {
    let table = ShapeTableHandle::bundled();
    let mut group = c.benchmark_group("fh95_batch_size");

    for batch in [64, 4096, 65_536] {
        let config = SamplerConfig::builder().batch_size(batch).build().unwrap();
        let sampler = FriedrichHerschbach::with_config(table.clone(), &config);
        group.bench_with_input(BenchmarkId::from_parameter(batch), &batch, |b, _| {
            let mut rng = PdfRng::from_seed(7);
            b.iter(|| sampler.sample_1d(0.3, 10_000, &mut rng).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample_1d_by_sigma, bench_batch_size);
criterion_main!(benches);
