//! Benchmarks for the block parser in kernel/src/parser.
//!
//! Performance-critical paths:
//! - `parse` over many small blocks (typical multi-file paste)
//! - `parse` over one large block (a single big file)

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use paster_kernel::parser::parse;

fn many_blocks(count: usize, lines_per_block: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        text.push_str(&format!("File: src/module_{i}/mod.rs\nContent:\n"));
        for line in 0..lines_per_block {
            text.push_str(&format!("pub fn item_{line}() -> usize {{ {line} }}\n"));
        }
    }
    text
}

fn bench_many_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser/many_blocks");

    for count in [1usize, 10, 100, 1000] {
        let text = many_blocks(count, 20);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| parse(black_box(text)));
        });
    }

    group.finish();
}

fn bench_large_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser/large_block");

    for lines in [1_000usize, 10_000, 100_000] {
        let text = many_blocks(1, lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| parse(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_many_blocks, bench_large_block);
criterion_main!(benches);
