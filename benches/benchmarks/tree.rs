use std::hint::black_box;

use criterion::{criterion_group, Criterion};
use digest_huff::huffman::code_table::CodeTable;
use digest_huff::huffman::frequency::FrequencyTable;
use digest_huff::huffman::tree::HuffmanTree;

use crate::benchmarks::digests;

fn tree_building_benchmark(c: &mut Criterion) {
    let freqs = digests()
        .iter()
        .map(|digest| FrequencyTable::count(digest))
        .collect::<Vec<_>>();
    let mut group = c.benchmark_group("tree");

    group.bench_function("build", |b| {
        b.iter(|| {
            for table in &freqs {
                black_box(HuffmanTree::build(table).unwrap());
            }
        })
    });

    group.bench_function("build + code table", |b| {
        b.iter(|| {
            for table in &freqs {
                black_box(CodeTable::from_tree(&HuffmanTree::build(table).unwrap()));
            }
        })
    });
    group.finish();
}

criterion_group! {
    name = tree_benches;
    config = Criterion::default();
    targets = tree_building_benchmark
}
