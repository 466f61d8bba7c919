//! Criterion benchmarks for match-finder parsing throughput.
//!
//! Run with:
//!   cargo bench --bench finder

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lza::finder::MatchFinder;

fn repetitive_corpus(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog. ".iter().copied().cycle().take(len).collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("finder_parse");

    for &size in &[16_384usize, 262_144] {
        let data = repetitive_corpus(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("parse", size), &data, |b, data| {
            b.iter(|| MatchFinder::new(data).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
