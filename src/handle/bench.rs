use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tablehandle::{ColumnHandle, TableHandle};

pub fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Construction");

    group.bench_function("table_handle_new", |b| {
        b.iter(|| TableHandle::new(black_box("sales"), black_box("orders"), black_box(42), None))
    });

    let column = Arc::new(ColumnHandle::new("weight", 1).unwrap());
    group.bench_function("table_handle_new_weighted", |b| {
        b.iter(|| {
            TableHandle::new(
                black_box("sales"),
                black_box("orders"),
                black_box(42),
                Some(column.clone()),
            )
        })
    });

    group.finish();
}

pub fn bench_hashing(c: &mut Criterion) {
    let handle = TableHandle::new("sales", "orders", 42, None).unwrap();

    let mut group = c.benchmark_group("Hashing");

    group.bench_function("std_hash", |b| {
        b.iter(|| {
            let mut hasher = DefaultHasher::new();
            black_box(&handle).hash(&mut hasher);
            hasher.finish()
        })
    });
    group.bench_function("stable_hash", |b| b.iter(|| black_box(&handle).stable_hash()));

    group.finish();
}

pub fn bench_json(c: &mut Criterion) {
    let handle = TableHandle::new(
        "sales",
        "orders",
        42,
        Some(Arc::new(ColumnHandle::new("weight", 1).unwrap())),
    )
    .unwrap();
    let json = serde_json::to_string(&handle).unwrap();

    let mut group = c.benchmark_group("Json");

    group.bench_function("encode", |b| b.iter(|| serde_json::to_string(black_box(&handle))));
    group.bench_function("decode", |b| {
        b.iter(|| serde_json::from_str::<TableHandle>(black_box(&json)))
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_hashing, bench_json);
criterion_main!(benches);
