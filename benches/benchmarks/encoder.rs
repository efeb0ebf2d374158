use std::hint::black_box;

use criterion::{criterion_group, Criterion};
use digest_huff::huffman::code_table::CodeTable;
use digest_huff::huffman::compressor::HuffmanCompressor;
use digest_huff::huffman::encoder::encode;
use digest_huff::huffman::frequency::FrequencyTable;
use digest_huff::huffman::packer::pack;
use digest_huff::huffman::tree::HuffmanTree;
use digest_huff::traits::NoopObserver;

use crate::benchmarks::digests;

fn encoding_benchmark(c: &mut Criterion) {
    let digests = digests();
    let tables = digests
        .iter()
        .map(|digest| CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::count(digest)).unwrap()))
        .collect::<Vec<_>>();
    let mut group = c.benchmark_group("encoder");

    group.bench_function("encode + pack", |b| {
        b.iter(|| {
            for (digest, table) in digests.iter().zip(&tables) {
                let encoded = encode(digest, table).unwrap();
                black_box(pack(encoded.as_bitslice()));
            }
        })
    });

    group.bench_function("whole pipeline", |b| {
        let compressor = HuffmanCompressor::default();
        b.iter(|| {
            for digest in &digests {
                black_box(compressor.compress_text_with(digest, NoopObserver).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default();
    targets = encoding_benchmark
}
