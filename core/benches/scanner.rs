//! Scanner throughput, fresh and with a reused scanner.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kestrel::Scanner;

fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "/// doc for f{i}\nfn f{i}(x: i64) -> i64 {{ let s = \"n\\t{i}\"; return x * {i}i64 - -1.5e3f64; }}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_fresh_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/fresh");
    for n in [10, 100, 1000] {
        let source = generate_n_functions(n);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, src| {
            b.iter(|| {
                let mut scanner = Scanner::new(src);
                black_box(scanner.scan_all());
            });
        });
    }
    group.finish();
}

fn bench_cleared_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/cleared");
    for n in [10, 100, 1000] {
        let source = generate_n_functions(n);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, src| {
            let mut scanner = Scanner::new(src);
            b.iter(|| {
                scanner.clear();
                for token in scanner.by_ref() {
                    black_box(token);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fresh_scanner, bench_cleared_scanner);
criterion_main!(benches);
