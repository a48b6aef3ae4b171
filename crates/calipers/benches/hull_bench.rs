//! Criterion benchmarks for the two hull builders.
//! Focus sizes: n in {10, 100, 1000, 10000}, uniform in an ellipse and on a raster.
//! Results: by default under target/criterion.

use calipers::api::{angle_scan_hull, draw_points, quick_hull, PointSet, ReplayToken, SampleCfg};
use calipers::Vec2;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn cloud(set: PointSet, n: usize, index: u64) -> Vec<Vec2> {
    let cfg = SampleCfg {
        count: n,
        ..SampleCfg::default()
    };
    draw_points(set, cfg, ReplayToken { seed: 42, index }).unwrap()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::new("quick", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(PointSet::Random, n, 1),
                |pts| {
                    let _h = quick_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("angle_scan", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(PointSet::Random, n, 1),
                |pts| {
                    let _h = angle_scan_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        // many exact collinear and duplicate points
        let raster = PointSet::RandomInRaster { raster: 20 };
        group.bench_with_input(BenchmarkId::new("quick_raster", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(raster, n, 2),
                |pts| {
                    let _h = quick_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("angle_scan_raster", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(raster, n, 2),
                |pts| {
                    let _h = angle_scan_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
