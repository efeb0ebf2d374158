use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::digest::HashAlgorithm;
use crate::huffman::code_table::CodeTable;
use crate::huffman::encoder::{encode, EncodedBits};
use crate::huffman::frequency::FrequencyTable;
use crate::huffman::packer::BitPacker;
use crate::huffman::tree::HuffmanTree;
use crate::traits::{EncodeObserver, LogObserver};
use crate::utils::entropy_bits;
use crate::{Result, HEX_BITS_PER_SYMBOL};

/// Size figures of a single compression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressionReport {
    /// The length of the compressed text in symbols.
    pub symbols: usize,

    pub distinct_symbols: usize,

    /// The length of the encoded bit stream.
    pub encoded_bits: usize,

    /// The length of the packed output, i.e. `ceil(encoded_bits / 8)`.
    pub packed_bytes: usize,

    /// The bits the text takes with a fixed-width code of [`HEX_BITS_PER_SYMBOL`] bits.
    pub fixed_width_bits: usize,

    /// The lower bound given by the entropy of the symbol distribution.
    pub entropy_bits: f64,
}

impl CompressionReport {
    /// The size of the encoded stream with respect to the fixed-width encoding.
    pub fn ratio(&self) -> f64 {
        match self.fixed_width_bits {
            0 => 0.0,
            fixed => self.encoded_bits as f64 / fixed as f64,
        }
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} symbols ({} distinct) -> {} bits in {} bytes | fixed width {} bits ({:.2}%) | entropy {:.2} bits",
            self.symbols,
            self.distinct_symbols,
            self.encoded_bits,
            self.packed_bytes,
            self.fixed_width_bits,
            self.ratio() * 100.0,
            self.entropy_bits,
        )
    }
}

/// The result of compressing a text.
#[derive(Clone, Debug)]
pub struct Compressed {
    /// The compressed text, i.e. the hexadecimal digest when compressing raw data.
    pub text: String,

    pub code_table: CodeTable,

    pub bits: EncodedBits,

    /// The packed bits. This is the only part written to the output file.
    pub packed: Vec<u8>,

    pub report: CompressionReport,
}

/// Hashes data and compresses the hexadecimal digest with a Huffman code.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanCompressor {
    algorithm: HashAlgorithm,
}

impl HuffmanCompressor {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Compresses `text` as is, logging each stage through a [`LogObserver`].
    pub fn compress_text(&self, text: &str) -> Result<Compressed> {
        self.compress_text_with(text, LogObserver)
    }

    /// Compresses `text` as is, notifying `observer` as soon as each stage has been built.
    ///
    /// Note: it returns [`Error::EmptyInput`](crate::Error::EmptyInput) if `text` is empty.
    pub fn compress_text_with(&self, text: &str, mut observer: impl EncodeObserver) -> Result<Compressed> {
        let freqs = FrequencyTable::count(text);
        observer.frequencies_built(&freqs);

        let tree = HuffmanTree::build(&freqs)?;
        observer.tree_built(&tree);

        let code_table = CodeTable::from_tree(&tree);
        observer.code_table_built(&code_table);
        drop(tree);

        let bits = encode(text, &code_table)?;
        debug!("encoded bits: {}", bits);

        let mut packer = BitPacker::new(Vec::with_capacity(bits.len().div_ceil(8)));
        packer.extend(bits.as_bitslice())?;
        let packed = packer.finish()?;

        let report = CompressionReport {
            symbols: freqs.total(),
            distinct_symbols: freqs.len(),
            encoded_bits: bits.len(),
            packed_bytes: packed.len(),
            fixed_width_bits: freqs.total() * HEX_BITS_PER_SYMBOL,
            entropy_bits: entropy_bits(&freqs),
        };
        info!("{}", report);

        Ok(Compressed {
            text: text.to_owned(),
            code_table,
            bits,
            packed,
            report,
        })
    }

    /// Hashes `data` and compresses its hexadecimal digest.
    pub fn compress_bytes(&self, data: &[u8]) -> Result<Compressed> {
        let digest = self.algorithm.hex_digest(data);
        info!("{} digest: {}", self.algorithm, digest);

        self.compress_text(&digest)
    }

    /// Reads `input`, compresses the digest of its content and writes the packed bits to
    /// `output`. The output file is created only once compression has succeeded.
    pub fn compress_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Compressed> {
        let data = fs::read(input.as_ref())?;
        debug!("read {} bytes from {}", data.len(), input.as_ref().display());

        let compressed = self.compress_bytes(&data)?;
        write_packed(output, &compressed.packed)?;

        Ok(compressed)
    }
}

/// Writes `packed` to the file at `path`, replacing its content.
pub fn write_packed(path: impl AsRef<Path>, packed: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    writer.write_all(packed)?;
    writer.flush()?;

    debug!("wrote {} bytes to {}", packed.len(), path.as_ref().display());
    Ok(())
}
