use criterion::*;

mod insert_benchmark;
mod locate_benchmark;
mod polygon_query_benchmark;

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = hull_benchmark::hull_benchmark, polygon_query_benchmark::polygon_query_benchmark, insert_benchmark::insert_benchmark, locate_benchmark::locate_benchmark
}

criterion_main!(benches);
