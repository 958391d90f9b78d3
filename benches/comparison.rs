//! Comparison benchmarks: sha1-stream vs the RustCrypto `sha1` crate

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sha1::Digest as _;

fn bench_sha1_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha1_stream");

    for size in [64, 1024, 16 * 1024] {
        let data = vec![0u8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, d| {
            b.iter(|| black_box(sha1_stream::sha1(d)));
        });
    }

    group.finish();
}

fn bench_rustcrypto(c: &mut Criterion) {
    let mut group = c.benchmark_group("rustcrypto_sha1");

    for size in [64, 1024, 16 * 1024] {
        let data = vec![0u8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, d| {
            b.iter(|| black_box(sha1::Sha1::digest(d)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha1_stream, bench_rustcrypto);
criterion_main!(benches);
