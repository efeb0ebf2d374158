use digest_huff::digest::HashAlgorithm;

pub mod encoder;
pub mod tree;

/// Number of digests used by each bench.
const DIGESTS: usize = 1_000;

/// SHA-256 digests of the first [`DIGESTS`] integers.
fn digests() -> Vec<String> {
    (0..DIGESTS as u64)
        .map(|index| HashAlgorithm::Sha256.hex_digest(&index.to_le_bytes()))
        .collect()
}
