use criterion::*;
use planar_kernel::Point2;

use crate::benchmark_utilities::*;

pub fn polygon_query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon queries");

    for corners in [8, 64, 512, 4096] {
        let a = regular_polygon(Point2::new(0.0, 0.0), 10.0, corners);
        let disjoint = regular_polygon(Point2::new(25.0, 7.0), 10.0, corners);
        let overlapping = regular_polygon(Point2::new(12.0, 3.0), 10.0, corners);

        group.bench_with_input(
            BenchmarkId::new("intersects (disjoint)", corners),
            &corners,
            |b, _| b.iter(|| a.intersects(black_box(&disjoint))),
        );
        group.bench_with_input(
            BenchmarkId::new("intersects (overlapping)", corners),
            &corners,
            |b, _| b.iter(|| a.intersects(black_box(&overlapping))),
        );
        group.bench_with_input(
            BenchmarkId::new("min distance", corners),
            &corners,
            |b, _| b.iter(|| a.min_distance_squared(black_box(&disjoint))),
        );
        group.bench_with_input(BenchmarkId::new("contains", corners), &corners, |b, _| {
            b.iter(|| a.contains(black_box(Point2::new(3.0, 4.0))))
        });
    }

    group.finish();
}
