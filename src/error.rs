//! Error types of the compression pipeline.

use thiserror::Error;

use crate::Symbol;

/// Result type alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be read or the output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A symbol of the text has no code in the code table.
    ///
    /// Within the pipeline every symbol gets a leaf, hence this signals a broken invariant.
    #[error("no code for symbol {symbol:?}")]
    MissingCode { symbol: Symbol },

    /// The text has no symbols, so no tree can be built.
    #[error("cannot build a Huffman tree from an empty input")]
    EmptyInput,

    /// An explicit frequency table contained a symbol that never occurs.
    #[error("symbol {symbol:?} has frequency 0")]
    ZeroFrequency { symbol: Symbol },
}
