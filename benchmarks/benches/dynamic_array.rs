// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use dynarr::{DynamicArray, reserve};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench dynamic_array
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs DynamicArray
// =============================================================================

fn bench_push_back_growing(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_growing");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..s {
                    array.push_back(i as u64);
                }
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_push_back_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_reserved");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::<u64>::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            let mut array: DynamicArray<u64> = reserve(s).into();
            b.iter(|| {
                array.clear();
                for i in 0..s {
                    array.push_back(i as u64);
                }
                black_box(&array);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..s {
                    array.insert(0, i as u64);
                }
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<Vec<_>>(),
                |mut vec| {
                    while !vec.is_empty() {
                        vec.remove(0);
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<DynamicArray<_>>(),
                |mut array| {
                    while !array.is_empty() {
                        array.erase(0);
                    }
                    black_box(array)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let vec: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("Vec", size), &vec, |b, v| {
            b.iter(|| black_box(v.clone()));
        });

        let array: DynamicArray<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &array, |b, a| {
            b.iter(|| black_box(a.clone()));
        });
    }

    group.finish();
}

criterion_group!(
    dynamic_array_benches,
    bench_push_back_growing,
    bench_push_back_reserved,
    bench_insert_front,
    bench_erase_front,
    bench_clone
);

criterion_main!(dynamic_array_benches);
