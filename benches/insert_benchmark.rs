use criterion::*;

use crate::benchmark_utilities::*;

pub fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert benchmark");
    let sizes = [200, 1000, 5000, 20_000];

    for distribution in [SampleDistribution::Uniform, SampleDistribution::RandomWalk] {
        for size in sizes {
            group.throughput(Throughput::Elements(size as u64));
            let points = distribution.sample(size);
            group.bench_with_input(
                BenchmarkId::new(format!("incremental insertion, {}", distribution), size),
                &points,
                |b, points| b.iter(|| build_mesh(points)),
            );
        }
    }

    group.finish();
}
