//! Throughput of the tree folder and zero initialization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use atomvm::path::{self, CanonicalPath};
use atomvm::tree;
use atomvm::{AtomVm, Value};

fn atoms(n: usize) -> Vec<Value> {
    (0..n).map(|i| Value::text(format!("A{}", i))).collect()
}

/// Benchmark: fold flat sequences into relation trees.
fn bench_fold(c: &mut Criterion) {
    let small = atoms(8);
    let odd = atoms(255);
    let full = atoms(256);

    let mut group = c.benchmark_group("fold");
    group.bench_function("8_atoms", |b| b.iter(|| tree::fold(black_box(&small))));
    group.bench_function("255_atoms", |b| b.iter(|| tree::fold(black_box(&odd))));
    group.bench_function("256_atoms", |b| b.iter(|| tree::fold(black_box(&full))));
    group.finish();
}

/// Benchmark: reset all 512 leaves.
fn bench_zero(c: &mut Criterion) {
    let mut vm = AtomVm::new();
    c.bench_function("initialize_zero", |b| b.iter(|| vm.initialize_zero()));
}

/// Benchmark: parse + validate every canonical path.
fn bench_path_codec(c: &mut Criterion) {
    let texts: Vec<String> = CanonicalPath::all().iter().map(|p| p.to_string()).collect();
    c.bench_function("parse_validate_all", |b| {
        b.iter(|| {
            texts
                .iter()
                .filter(|t| path::parse(black_box(t)).is_ok_and(|r| path::validate(&r)))
                .count()
        })
    });
}

criterion_group!(benches, bench_fold, bench_zero, bench_path_codec);
criterion_main!(benches);
