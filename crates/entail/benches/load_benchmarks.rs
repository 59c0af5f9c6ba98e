//! Dataset load and export benchmarks.
//!
//! Measures validation, export and snapshot cost across dataset sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use entail::{Label, MemoryStore, SessionManager, parse_dataset};

/// Generate a synthetic dataset with the specified number of pairs.
fn generate_dataset(rows: usize) -> String {
    let mut data = String::from("[");

    for row in 0..rows {
        if row > 0 {
            data.push(',');
        }
        let label = match row % 4 {
            0 => ",\"label\":\"entailment\"",
            1 => ",\"label\":\"neutral\"",
            _ => "",
        };
        data.push_str(&format!(
            "{{\"pair_id\":\"{:06}\",\"premise\":\"Premise sentence number {} about a scene.\",\"hypothesis\":\"Hypothesis {} about it.\",\"genre\":\"fiction\"{}}}",
            row, row, row, label
        ));
    }

    data.push(']');
    data
}

/// Benchmark parsing and validating datasets of various sizes.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_dataset");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_dataset(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| parse_dataset(black_box(data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark labeling with a snapshot after every pick.
fn bench_label_and_persist(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_label");

    for rows in [100, 1_000].iter() {
        let data = generate_dataset(*rows);

        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut manager = SessionManager::new(MemoryStore::new());
                    manager.load(data, "bench.json").unwrap();
                    manager
                },
                |mut manager| {
                    for _ in 0..10 {
                        manager.select_label(black_box(Label::Contradiction));
                    }
                },
            );
        });
    }

    group.finish();
}

/// Benchmark export serialization.
fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_json");

    for rows in [1_000, 10_000].iter() {
        let mut manager = SessionManager::new(MemoryStore::new());
        manager.load(&generate_dataset(*rows), "bench.json").unwrap();

        group.bench_with_input(BenchmarkId::new("rows", rows), &manager, |b, manager| {
            b.iter(|| manager.export_json().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_label_and_persist, bench_export);
criterion_main!(benches);
