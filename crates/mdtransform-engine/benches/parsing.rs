use criterion::{Criterion, criterion_group, criterion_main};
use mdtransform_engine::{ParseOptions, RenderOptions, parse_document};
use xi_rope::Rope;
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let rope = Rope::from(common::generate_markdown_content(100));
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&rope), &ParseOptions::default());
            std::hint::black_box(doc)
        });
    });

    let outline = Rope::from(common::generate_deep_outline(50));
    group.bench_function("parse_deep_outline", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&outline), &ParseOptions::default());
            std::hint::black_box(doc)
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(10);

    let rope = Rope::from(common::generate_markdown_content(100));
    let Ok(doc) = parse_document(&rope, &ParseOptions::default()) else {
        return;
    };
    let options = RenderOptions { numbered_toc: true };
    group.bench_function("render", |b| {
        b.iter(|| std::hint::black_box(doc.render(&options)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
