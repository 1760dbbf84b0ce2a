//! Benchmarks for previewing a parsed file set against an in-memory workspace.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use paster_kernel::parser::FileSet;
use paster_kernel::reconcile::preview;
use paster_kernel::vfs::MemoryFs;

fn file_set(count: usize) -> FileSet {
    (0..count)
        .map(|i| (format!("src/file_{i}.rs"), format!("// file {i}\nfn f() {{}}\n")))
        .collect()
}

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile/preview");
    let runtime = tokio::runtime::Runtime::new().unwrap();

    for count in [10usize, 100, 1000] {
        let files = file_set(count);
        // Half the files already exist so both actions are exercised.
        let fs = MemoryFs::with_files(
            (0..count / 2).map(|i| (format!("src/file_{i}.rs"), "old".to_string())),
        );

        let fs = &fs;
        group.bench_with_input(BenchmarkId::from_parameter(count), &files, |b, files| {
            b.to_async(&runtime)
                .iter(|| async move { preview(black_box(files), fs).await });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_preview);
criterion_main!(benches);
