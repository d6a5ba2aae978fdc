//! Benchmarks for the IBLT engine's insert/subtract/list hot path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmer_iblt::{Iblt, Reconcilable};

fn pack_kmer(k: u8, value: u64) -> Vec<u8> {
    let byte_len = ((2 * u64::from(k) + 7) / 8) as usize;
    value.to_be_bytes()[8 - byte_len..].to_vec()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("iblt_insert");

    for &size in &[100u64, 500, 1000] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut iblt = Iblt::new(16, 4, 0.1, size, 42).unwrap();
                for i in 0..size {
                    iblt.insert(&pack_kmer(16, i)).unwrap();
                }
                black_box(iblt);
            });
        });
    }

    group.finish();
}

fn bench_subtract_and_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("iblt_subtract_and_list");

    for &diff_size in &[10u64, 50, 100] {
        group.throughput(Throughput::Elements(diff_size));

        group.bench_with_input(
            BenchmarkId::from_parameter(diff_size),
            &diff_size,
            |b, &diff_size| {
                let shared = diff_size * 4;
                let mut alice = Iblt::new(16, 4, 0.1, diff_size * 2, 42).unwrap();
                let mut bob = Iblt::new(16, 4, 0.1, diff_size * 2, 42).unwrap();

                for i in 0..shared {
                    alice.insert(&pack_kmer(16, i)).unwrap();
                    bob.insert(&pack_kmer(16, i)).unwrap();
                }
                for i in 0..diff_size {
                    alice.insert(&pack_kmer(16, shared + i)).unwrap();
                    bob.insert(&pack_kmer(16, shared + diff_size + i)).unwrap();
                }

                b.iter(|| {
                    let mut diff = alice.clone();
                    diff.subtract(black_box(&bob)).unwrap();
                    let result = diff.list().unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_subtract_and_list);
criterion_main!(benches);
