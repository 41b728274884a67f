// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for select option filtering.
//!
//! Measures the performance of:
//! - Filtering with a short, common term
//! - Filtering with a term that matches nothing
//! - The empty-term fast path

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_primer::ui::select::{filter, SelectOption};
use std::hint::black_box;

/// Builds `count` options with varied labels.
fn options(count: usize) -> Vec<SelectOption> {
    const NAMES: [&str; 8] = [
        "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel",
    ];

    (0..count)
        .map(|i| {
            let label = format!("{} {}", NAMES[i % NAMES.len()], i);
            SelectOption::new(label, i.to_string())
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("option_filtering");

    for size in [10, 100, 1_000, 10_000] {
        let list = options(size);

        group.bench_with_input(BenchmarkId::new("common_term", size), &list, |b, list| {
            b.iter(|| black_box(filter(black_box(list), black_box("ha"))));
        });

        group.bench_with_input(BenchmarkId::new("no_match", size), &list, |b, list| {
            b.iter(|| black_box(filter(black_box(list), black_box("zulu"))));
        });

        group.bench_with_input(BenchmarkId::new("empty_term", size), &list, |b, list| {
            b.iter(|| black_box(filter(black_box(list), black_box(""))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
