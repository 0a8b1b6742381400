// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shelf_scrape::specs::book;

const URL: &str = "https://www.goodreads.com/book/show/234225.Dune";

fn load_sample(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

fn bench_extract(c: &mut Criterion) {
    let rendered = load_sample("book_rendered.html");
    let fallback = load_sample("book_fallback.html");
    let static_page = load_sample("book_static.html");

    c.bench_function("extract_rendered_primary", |b| {
        b.iter(|| {
            let rec = book::extract(black_box(&rendered), URL);
            black_box(rec.rating.is_found())
        })
    });

    // every field falls through at least one tier
    c.bench_function("extract_rendered_fallback", |b| {
        b.iter(|| {
            let rec = book::extract(black_box(&fallback), URL);
            black_box(rec.description.is_found())
        })
    });

    c.bench_function("extract_static", |b| {
        b.iter(|| {
            let rec = book::extract_static(black_box(&static_page), URL);
            black_box(rec.rating_count.is_found())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
