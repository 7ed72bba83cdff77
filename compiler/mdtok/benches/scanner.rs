//! Scanner benchmarks for `mdtok_core`.
//!
//! Measures pure tokenization throughput: tokens are consumed in a tight
//! loop without collecting them.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdtok_core::{Scanner, SourceBuffer};

/// Generate a document with `n` sections of headings, lists and emphasis.
fn generate_n_sections(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "## Section {i}\n\
                 Some *italic* and **bold** text, plus a lone * star.\n\
                 - item {i} with **emphasis**\n\
                 - another item\n"
            )
        })
        .collect()
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/throughput");

    for sections in [10, 100, 1000, 10000] {
        let source = generate_n_sections(sections);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &source, |b, src| {
            b.iter(|| {
                let buf = SourceBuffer::new(src);
                let mut scanner = Scanner::new(buf.cursor());
                loop {
                    let tok = scanner.next_token();
                    if tok.is_end() {
                        break;
                    }
                    black_box(tok);
                }
            });
        });
    }

    group.finish();
}

fn bench_long_text_run(c: &mut Criterion) {
    let source = "plain words without markup ".repeat(4096);
    let mut group = c.benchmark_group("scanner/text_run");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("single_line", |b| {
        b.iter(|| {
            let buf = SourceBuffer::new(black_box(&source));
            Scanner::new(buf.cursor()).count()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_throughput, bench_long_text_run);
criterion_main!(benches);
