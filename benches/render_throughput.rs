//! Page rendering throughput benchmarks
//!
//! Measures a full render (markdown conversion, template assembly and HTML
//! output) for pages with growing body sizes.
//!
//! Run benchmarks: `cargo bench --bench render_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docpage::{Page, PageRenderer};
use std::hint::black_box;

fn page_with_sections(sections: usize) -> Page {
    let body = (0..sections)
        .map(|i| format!("## Section {i}\n\nSome *emphasised* text with `code` and a [link](#s{i}).\n"))
        .collect::<Vec<_>>()
        .join("\n");

    Page {
        body,
        repo: Some("https://github.com/apache/cordova-plugin-camera".into()),
        cordova: Some("cordova-plugin-camera".into()),
        package: Some("@ionic-native/camera".into()),
        platforms: vec!["Android".into(), "Browser".into(), "iOS".into()],
        code_usage: Some("```typescript\nthis.camera.getPicture(options);\n```".into()),
        ..Page::new("Camera", "/docs/native/camera")
    }
}

fn bench_render(c: &mut Criterion) {
    let renderer = PageRenderer::new();
    let mut group = c.benchmark_group("render_html");

    for sections in [1, 10, 100] {
        let page = page_with_sections(sections);
        group.throughput(Throughput::Bytes(page.body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &page, |b, page| {
            b.iter(|| renderer.render_html(black_box(page)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
