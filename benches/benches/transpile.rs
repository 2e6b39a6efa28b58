//! Transpile throughput benchmarks
//!
//! - single small tags
//! - a generated document of nested functions, loops and conditionals
//! - raw code passthrough

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use emojiscript_markup::{Flavor, transpile};
use std::hint::black_box;

/// `units` top-level functions, each with a loop, a conditional and a few
/// declarations inside.
fn generated_document(units: usize) -> String {
    let mut doc = String::new();
    for n in 0..units {
        doc.push_str(&format!(
            r#"<function name="step{n}" params="items">
  <let name="total" value="0"/>
  <loop var="item" in="items">
    <if condition="item > {n}">
      <print>item</print>
    </if>
    total += item
  </loop>
  <return>total</return>
</function>
"#
        ));
    }
    doc
}

fn benchmark_single_tags(c: &mut Criterion) {
    c.bench_function("transpile_print", |b| {
        b.iter(|| transpile(black_box(r#"<print>"Hello"</print>"#), Flavor::JavaScript));
    });

    c.bench_function("transpile_typed_variable", |b| {
        b.iter(|| {
            transpile(
                black_box(r#"<let name="count" value="0" type="number"/>"#),
                Flavor::TypeScript,
            )
        });
    });
}

fn benchmark_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpile_document");
    for units in [10, 100, 1000] {
        let doc = generated_document(units);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(units), &doc, |b, doc| {
            b.iter(|| transpile(black_box(doc), Flavor::JavaScript));
        });
    }
    group.finish();
}

fn benchmark_passthrough(c: &mut Criterion) {
    let raw = "const total = items.reduce((a, b) => a + b, 0);\n".repeat(500);
    c.bench_function("transpile_raw_passthrough", |b| {
        b.iter(|| transpile(black_box(&raw), Flavor::JavaScript));
    });
}

criterion_group!(
    benches,
    benchmark_single_tags,
    benchmark_documents,
    benchmark_passthrough
);
criterion_main!(benches);
