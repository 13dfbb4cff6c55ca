//! Benchmarks for the Solve3 calculator
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use solve3::calculator::*;
use solve3::report::{Report, ReportFormat};

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for horizon in [50, 520, 5200] {
        let schedule = EmissionScheduleParams::default().horizon(horizon);
        group.throughput(Throughput::Elements(horizon as u64));

        group.bench_function(format!("emissions_{}", horizon), |b| {
            b.iter(|| generate_emission_series(black_box(&schedule)))
        });

        let emissions = generate_emission_series(&schedule);
        group.bench_function(format!("cumulative_{}", horizon), |b| {
            b.iter(|| cumulative_sum(black_box(&emissions)))
        });
    }

    group.finish();
}

fn bench_projections(c: &mut Criterion) {
    let mut group = c.benchmark_group("projections");
    let schedule = EmissionScheduleParams::default();
    let presale = PresaleEarningsParams::default();

    group.bench_function("presale_default", |b| {
        b.iter(|| PresaleProjection::compute(black_box(&schedule), black_box(&presale)).unwrap())
    });

    group.bench_function("emissions_default", |b| {
        b.iter(|| EmissionsProjection::compute(black_box(&schedule), 0.17, 0.0).unwrap())
    });

    group.bench_function("farming_default", |b| {
        let params = FarmingParams::default();
        b.iter(|| FarmingProjection::compute(black_box(&params)).unwrap())
    });

    let projection = PresaleProjection::compute(&schedule, &presale).unwrap();
    group.bench_function("presale_csv", |b| {
        b.iter(|| {
            Report::from_presale(black_box(&projection))
                .render(ReportFormat::Csv)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_series, bench_projections);
criterion_main!(benches);
