use std::time::Duration;

use criterion::*;

use crate::benchmark_utilities::*;

pub fn locate_benchmark(c: &mut Criterion) {
    const NUM_ELEMENTS: usize = 50_000;

    let points: Vec<_> = uniform_distribution(*SEED2, RANGE)
        .take(NUM_ELEMENTS)
        .collect();
    let mesh = build_mesh(&points);

    let mut group = c.benchmark_group("locate benchmark (uniform)");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(4));

    let mut queries = uniform_distribution(*SEED, RANGE);
    group.bench_function("locate", |b| {
        b.iter_with_setup(
            || queries.next().unwrap(),
            |point| mesh.locate(point).map(|edge| edge.fix()),
        )
    });

    let mut queries = uniform_distribution(*SEED, RANGE);
    group.bench_function("nearest vertex", |b| {
        b.iter_with_setup(
            || queries.next().unwrap(),
            |point| mesh.nearest_vertex(point).map(|vertex| vertex.id),
        )
    });

    group.finish();
}
