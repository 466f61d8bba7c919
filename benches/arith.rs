//! Criterion benchmarks for the adaptive arithmetic coder.
//!
//! Run with:
//!   cargo bench --bench arith

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lza::arith::{decode, encode};

fn synthetic_corpus(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u32).wrapping_mul(2654435761).wrapping_shr(21) as u8).collect()
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith_encode_decode");

    for &size in &[4_096usize, 65_536] {
        let data = synthetic_corpus(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| encode(data, 128));
        });

        let encoded = encode(&data, 128);
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| decode(encoded, size, 128));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode_decode);
criterion_main!(benches);
