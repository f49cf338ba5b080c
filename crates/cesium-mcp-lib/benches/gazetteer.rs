use criterion::{criterion_group, criterion_main, Criterion};
use cesium_mcp_lib::gazetteer;
use once_cell::sync::Lazy;
use std::hint::black_box;

static LAST_ENTRY: Lazy<&'static str> = Lazy::new(|| {
    gazetteer::list_all()
        .last()
        .map(|location| location.name)
        .expect("table is not empty")
});

fn benchmark_gazetteer(c: &mut Criterion) {
    c.bench_function("resolve_first_entry", |b| {
        b.iter(|| black_box(gazetteer::resolve(black_box("New York"))))
    });

    c.bench_function("resolve_last_entry", |b| {
        let name = *LAST_ENTRY;
        b.iter(|| black_box(gazetteer::resolve(black_box(name))))
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| black_box(gazetteer::resolve(black_box("not-a-real-place-xyz"))))
    });

    c.bench_function("search_prefix_san", |b| {
        b.iter(|| black_box(gazetteer::search(black_box("san"), 10).len()))
    });

    c.bench_function("suggest_typo", |b| {
        b.iter(|| black_box(gazetteer::suggest(black_box("seatle"), 3)))
    });
}

criterion_group!(benches, benchmark_gazetteer);
criterion_main!(benches);
