//! End-to-end conversion throughput benchmarks
//!
//! Measures markdown to document conversion with varying:
//! - Section counts (1, 10, 100)
//! - Variable substitution (none, source and placeholder passes)
//!
//! Run benchmarks: `cargo bench --bench conversion_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quire::{Converter, Variables};
use serde_json::json;
use std::hint::black_box;

/// One section exercising headings, lists, a merged table, and a callout.
fn section(i: usize) -> String {
    format!(
        "## Section {i}\n\n\
         Some **bold** and *italic* text with `code` and a [link](https://example.com/{i}).\n\n\
         1. first\n   - nested\n2. second\n\n\
         | Region | Q1 | Q2 |\n|---|---|---|\n| North | 1 | 2 |\n| ^^ | 3 | >> |\n\n\
         > [!NOTE]\n> Section {i} note for {{{{client}}}}.\n\n"
    )
}

fn document(sections: usize) -> String {
    let mut source = String::from("# {{title}}\n\n");
    for i in 0..sections {
        source.push_str(&section(i));
    }
    source
}

fn variables() -> Variables {
    [("title", json!("Benchmark")), ("client", json!("Acme"))]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn benchmark_section_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_throughput");
    let converter = Converter::default();

    for count in [1, 10, 100] {
        let source = document(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", count), &source, |b, source| {
            b.iter(|| converter.convert(black_box(source)).expect("conversion failed"));
        });
    }

    group.finish();
}

fn benchmark_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitution");
    let source = document(10);
    let plain = Converter::default();
    let with_vars = Converter::builder().with_variables(variables()).build();

    group.bench_function("no_variables", |b| {
        b.iter(|| plain.convert(black_box(&source)).expect("conversion failed"))
    });
    group.bench_function("with_variables", |b| {
        b.iter(|| with_vars.convert(black_box(&source)).expect("conversion failed"))
    });

    group.finish();
}

criterion_group!(benches, benchmark_section_scaling, benchmark_substitution);
criterion_main!(benches);
