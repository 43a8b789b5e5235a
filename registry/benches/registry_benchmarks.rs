use criterion::{Criterion, criterion_group, criterion_main};
use registry::{Registry, User};
use std::hint::black_box;

const USERS: i64 = 1_000;

fn populate() -> Registry {
    (0..USERS)
        .map(|i| match i % 3 {
            0 => User::plain(i, "plain", "plain", (i * 37 % 1_000) as f64),
            1 => User::premium(i, "premium", "premium", (i * 53 % 1_000) as f64, 50.0),
            _ => User::admin(i, "admin", "admin", (i * 71 % 1_000) as f64, "Full"),
        })
        .collect()
}

// Benchmark for sorting an unsorted registry
fn bench_sort_by_balance(c: &mut Criterion) {
    c.bench_function("sort_by_balance", |b| {
        b.iter_with_setup(populate, |mut registry| {
            registry.sort_by_balance();
            black_box(registry);
        })
    });
}

// Benchmark for re-sorting an already sorted registry
fn bench_sort_sorted(c: &mut Criterion) {
    c.bench_function("sort_by_balance_sorted", |b| {
        b.iter_with_setup(
            || {
                let mut registry = populate();
                registry.sort_by_balance();
                registry
            },
            |mut registry| {
                registry.sort_by_balance();
                black_box(registry);
            },
        )
    });
}

// Benchmark for a lookup hitting the last record
fn bench_find_last(c: &mut Criterion) {
    let registry = populate();
    c.bench_function("find_by_id_last", |b| {
        b.iter(|| black_box(registry.find_by_id(black_box(USERS - 1)).is_ok()))
    });
}

// Benchmark for a lookup that scans everything and misses
fn bench_find_missing(c: &mut Criterion) {
    let registry = populate();
    c.bench_function("find_by_id_missing", |b| {
        b.iter(|| black_box(registry.find_by_id(black_box(-1)).is_err()))
    });
}

criterion_group!(
    benches,
    bench_sort_by_balance,
    bench_sort_sorted,
    bench_find_last,
    bench_find_missing
);
criterion_main!(benches);
