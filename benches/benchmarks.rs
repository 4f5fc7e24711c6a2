use std::iter;

use bloomcap::{bounded, BloomFilter, BoundedBloomFilter};
use criterion::Criterion;

fn key() -> String {
    let rng = fastrand::Rng::new();
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn sized(capacity: usize) -> BloomFilter<String> {
    let nbits = bounded::estimate_bits(capacity, 0.01).unwrap();
    let nhashes = bounded::optimal_hashes(capacity, nbits);

    BloomFilter::new(nbits, nhashes)
}

fn populate(bf: &mut BloomFilter<String>, n: usize) {
    for _ in 0..n {
        let item = key();
        bf.insert(&item);
    }
}

fn bench_bloom_filter_insert(c: &mut Criterion) {
    c.bench_function("insert-1000", |b| {
        let mut bf = sized(1000);

        b.iter(|| {
            let item = key();
            bf.insert(&item);
        });
    });

    c.bench_function("insert-10000", |b| {
        let mut bf = sized(10000);

        b.iter(|| {
            let item = key();
            bf.insert(&item);
        });
    });
}

fn bench_bloom_filter_check(c: &mut Criterion) {
    c.bench_function("check-1000", |b| {
        let n = 1000;
        let mut bf = sized(n);
        populate(&mut bf, n);

        b.iter(|| {
            let item = key();
            bf.contains(&item);
        });
    });

    c.bench_function("check-10000", |b| {
        let n = 10000;
        let mut bf = sized(n);
        populate(&mut bf, n);

        b.iter(|| {
            let item = key();
            bf.contains(&item);
        });
    });
}

fn bench_bounded_insert(c: &mut Criterion) {
    c.bench_function("bounded-insert", |b| {
        // Sized far above the iteration count, so the capacity check stays
        // on the success path.
        let mut bf = BoundedBloomFilter::new(10_000_000, 0.01).unwrap();

        b.iter(|| {
            let item = key();
            let _ = bf.insert(&item);
        });
    });
}

criterion::criterion_group!(
    benches,
    bench_bloom_filter_insert,
    bench_bloom_filter_check,
    bench_bounded_insert
);
criterion::criterion_main!(benches);
