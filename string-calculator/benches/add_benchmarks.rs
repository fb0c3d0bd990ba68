//! Performance benchmarks for StringCalculator
//!
//! Run with: cargo bench --bench add_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use string_calculator::{CalculatorConfig, StringCalculator};

/// Generate `count` numbers joined by `delimiter`
fn generate_input(count: usize, delimiter: &str) -> String {
    (0..count)
        .map(|i| (i % 1000).to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Benchmark different input sizes with default delimiters
fn bench_input_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_sizes");
    let calc = StringCalculator::new();

    for count in [10, 1_000, 100_000] {
        let input = generate_input(count, ",");

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("add", count), &input, |b, input| {
            b.iter(|| calc.add(black_box(input.as_str())).unwrap());
        });
    }

    group.finish();
}

/// Benchmark custom delimiter headers
fn bench_custom_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("custom_delimiters");
    let calc = StringCalculator::new();

    for delimiter in [";", "***", "[|]"] {
        let literal = delimiter.trim_start_matches('[').trim_end_matches(']');
        let input = format!("//{delimiter}\n{}", generate_input(10_000, literal));

        group.bench_with_input(BenchmarkId::new("add", delimiter), &input, |b, input| {
            b.iter(|| calc.add(black_box(input.as_str())).unwrap());
        });
    }

    group.finish();
}

/// Compare token policies
fn bench_token_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_policies");
    let input = generate_input(10_000, ",");

    let lenient = StringCalculator::new();
    let strict = StringCalculator::with_config(CalculatorConfig::strict()).unwrap();

    group.bench_function("lenient", |b| {
        b.iter(|| lenient.add(black_box(input.as_str())).unwrap())
    });
    group.bench_function("strict", |b| {
        b.iter(|| strict.add(black_box(input.as_str())).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_input_sizes,
    bench_custom_delimiters,
    bench_token_policies
);
criterion_main!(benches);
