//! The Huffman engine, from symbol counting to byte packing.
//!
//! [`FrequencyTable`](frequency::FrequencyTable) → [`HuffmanTree`](tree::HuffmanTree) →
//! [`CodeTable`](code_table::CodeTable) → [`encode`](encoder::encode) →
//! [`BitPacker`](packer::BitPacker). [`HuffmanCompressor`](compressor::HuffmanCompressor) drives
//! the whole pipeline.

pub mod code_table;
pub mod compressor;
pub mod encoder;
pub mod frequency;
pub mod packer;
pub mod tree;
