//! Performance benchmarks for the Overlap Engine.
//!
//! Covers the overlap computation on synthetic workforces of growing size,
//! sequential against parallel, plus maximum-pair selection.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use overlap_engine::calculation::{compute_overlaps, compute_overlaps_parallel, find_max_pair};
use overlap_engine::models::WorkPeriod;

/// Creates `count` work periods spread over `projects` projects.
///
/// Uses a fixed linear congruential sequence so every run sees the same data.
fn create_work_periods(count: usize, projects: i64) -> Vec<WorkPeriod> {
    let base = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) % bound
    };

    (0..count)
        .map(|_| {
            let employee_id = next(count as u64 / 2 + 1) as i64;
            let project_id = next(projects as u64) as i64;
            let start = base + Duration::days(next(3_000) as i64);
            let end = start + Duration::days(next(400) as i64);
            WorkPeriod::new(employee_id, project_id, start, end)
        })
        .collect()
}

/// Benchmark: Sequential computation at several input sizes.
fn bench_compute_overlaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_overlaps");

    for count in [100usize, 1_000, 10_000].iter() {
        let periods = create_work_periods(*count, 50);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("records", count), &periods, |b, periods| {
            b.iter(|| black_box(compute_overlaps(black_box(periods))))
        });
    }

    group.finish();
}

/// Benchmark: Sequential against parallel on one large input.
fn bench_parallel(c: &mut Criterion) {
    let periods = create_work_periods(20_000, 200);

    let mut group = c.benchmark_group("parallel_vs_sequential");
    group.throughput(Throughput::Elements(periods.len() as u64));
    // Large inputs: fewer samples keep the run time reasonable
    group.sample_size(10);

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(compute_overlaps(black_box(&periods))))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(compute_overlaps_parallel(black_box(&periods))))
    });

    group.finish();
}

/// Benchmark: Maximum selection over a populated totals map.
fn bench_find_max_pair(c: &mut Criterion) {
    let periods = create_work_periods(5_000, 20);
    let totals = compute_overlaps(&periods);

    c.bench_function("find_max_pair", |b| {
        b.iter(|| black_box(find_max_pair(black_box(&totals))))
    });
}

criterion_group!(
    benches,
    bench_compute_overlaps,
    bench_parallel,
    bench_find_max_pair,
);
criterion_main!(benches);
