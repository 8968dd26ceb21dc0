use criterion::{Criterion, criterion_group, criterion_main};
use markdown_hawk_engine::{RenderOptions, parsing::scan_document};
use pulldown_cmark::Parser;
mod common;

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    let options = RenderOptions::default();
    group.bench_function("block_scan", |b| {
        b.iter(|| {
            let doc = scan_document(std::hint::black_box(&content), &options);
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_nested_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested");
    group.sample_size(10);

    let content = common::generate_complex_markdown(20, 4);
    let options = RenderOptions::default();
    group.bench_function("block_scan", |b| {
        b.iter(|| {
            let doc = scan_document(std::hint::black_box(&content), &options);
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pulldown_cmark_baseline, bench_nested_scan);
criterion_main!(benches);
