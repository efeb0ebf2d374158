use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use digest_huff::digest::HashAlgorithm;
use digest_huff::huffman::compressor::HuffmanCompressor;
use digest_huff::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Hashes a file and Huffman-compresses the hexadecimal digest", long_about = None)]
struct Args {
    /// The file to hash.
    #[clap(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// The file receiving the packed bits.
    #[clap(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// The hash function producing the digest.
    #[clap(short, long, value_enum, default_value_t = HashAlgorithm::Sha256)]
    algorithm: HashAlgorithm,

    /// Increases the verbosity of the log; repeat for more.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silences the log.
    #[clap(short, long)]
    quiet: bool,
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let compressed = HuffmanCompressor::new(args.algorithm)
        .compress_file(&args.input, &args.output)
        .with_context(|| {
            format!(
                "Could not compress {} into {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    info!(
        "{} bytes written to {}",
        compressed.packed.len(),
        args.output.display()
    );

    Ok(())
}
