// ABOUTME: Criterion benchmarks for destination cleanup and phone number normalization
// ABOUTME: Measures per-number normalization cost and dedupe throughput for growing destination lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! Criterion benchmarks for SMS destination handling.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kapcha_server::sms::phone::{dedupe_destinations, normalize_phone_number};

const SAMPLE_NUMBERS: [&str; 6] = [
    "0412 345 678",
    "412345678",
    "+61 412 345 678",
    "61412345678",
    "(04) 1234-5678",
    "6421234567",
];

/// Destination list where roughly a third of the entries repeat
fn destination_list(size: usize) -> Vec<String> {
    (0..size)
        .map(|index| format!("04{:08}", index % (size * 2 / 3).max(1)))
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_phone_number");
    for raw in SAMPLE_NUMBERS {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| normalize_phone_number(black_box(raw)));
        });
    }
    group.finish();
}

fn bench_dedupe(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedupe_destinations");
    for size in [10_usize, 100, 1_000] {
        let destinations = destination_list(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &destinations,
            |b, destinations| {
                b.iter(|| dedupe_destinations(black_box(destinations)));
            },
        );
    }
    group.finish();
}

fn bench_cloud_preparation(c: &mut Criterion) {
    let destinations = destination_list(500);
    c.bench_function("dedupe_then_normalize_500", |b| {
        b.iter(|| {
            dedupe_destinations(black_box(&destinations))
                .iter()
                .map(|destination| normalize_phone_number(destination))
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(benches, bench_normalize, bench_dedupe, bench_cloud_preparation);
criterion_main!(benches);
