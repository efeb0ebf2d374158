use criterion::criterion_main;

mod benchmarks;

criterion_main! {
    benchmarks::tree::tree_benches,
    benchmarks::encoder::encoder_benches,
}
