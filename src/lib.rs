//! Huffman compression of the hexadecimal text of a message digest.
//!
//! The input is hashed, the lowercase hex rendering of the digest is analyzed symbol by symbol,
//! and the resulting prefix code is packed LSB-first into raw bytes.
//!
//! ```
//! use digest_huff::huffman::compressor::HuffmanCompressor;
//!
//! let compressed = HuffmanCompressor::default().compress_text("aab").unwrap();
//! assert_eq!(compressed.bits.to_string(), "110");
//! assert_eq!(compressed.packed, vec![0b011]);
//! ```
//!
//! The packed bytes carry no code table and no symbol count, so they cannot be decoded on
//! their own.

pub mod digest;
pub mod error;
pub mod huffman;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};

/// The type representing a symbol of the text being compressed, i.e. one character of the
/// hexadecimal digest.
pub type Symbol = char;

/// The type representing the number of occurrences of a [`Symbol`].
pub type Freq = usize;

/// How many bits a hexadecimal symbol takes when stored with a fixed-width code.
pub const HEX_BITS_PER_SYMBOL: usize = 4;

/// The file read by the command line tool when no input is given.
pub const DEFAULT_INPUT: &str = "input.txt";

/// The file written by the command line tool when no output is given.
pub const DEFAULT_OUTPUT: &str = "encoded.bin";
