//! Registry lookup benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use mkvtags_bench::workload::IdWorkload;
use mkvtags_schema::{Profile, build_registry};
use std::hint::black_box;

fn benchmark_lookup_id(c: &mut Criterion) {
    let registry = build_registry(Profile::default()).unwrap();
    let known = IdWorkload::new(&registry, 0);
    let mixed = IdWorkload::new(&registry, 8);

    c.bench_function("lookup_id_known", |b| {
        b.iter(|| {
            for id in known.ids() {
                black_box(registry.lookup_id(black_box(*id)));
            }
        })
    });

    c.bench_function("lookup_id_mixed", |b| {
        b.iter(|| {
            for id in mixed.ids() {
                black_box(registry.lookup_id(black_box(*id)));
            }
        })
    });
}

fn benchmark_lookup_name(c: &mut Criterion) {
    let registry = build_registry(Profile::default()).unwrap();
    let names = IdWorkload::names(&registry);

    c.bench_function("lookup_name", |b| {
        b.iter(|| {
            for name in &names {
                let _ = black_box(registry.lookup_name(black_box(name)));
            }
        })
    });
}

fn benchmark_children(c: &mut Criterion) {
    let registry = build_registry(Profile::default()).unwrap();
    let entry = registry.lookup_name("TrackEntry").unwrap();

    c.bench_function("required_children", |b| {
        b.iter(|| black_box(registry.required_children(black_box(entry)).count()))
    });

    c.bench_function("is_child_of", |b| {
        let void = registry.lookup_name("Void").unwrap();
        b.iter(|| black_box(void.is_child_of(black_box(Some(entry)))))
    });
}

criterion_group!(
    benches,
    benchmark_lookup_id,
    benchmark_lookup_name,
    benchmark_children
);
criterion_main!(benches);
