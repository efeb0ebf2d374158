/*
 * Utility functions and consts used by the tests.
 *
 */
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use digest_huff::digest::HashAlgorithm;

/// The hexadecimal digits, in ascending order.
pub const HEX_DIGITS: &str = "0123456789abcdef";

/// How many random digests the property tests go through.
pub const DIGESTS_PER_TEST: usize = 200;

/// Creates `count` SHA-256 hex digests of random data drawn from a generator seeded with `seed`.
pub fn random_digests(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..256);
            let data = (0..len).map(|_| rng.gen::<u8>()).collect::<Vec<u8>>();
            HashAlgorithm::Sha256.hex_digest(&data)
        })
        .collect()
}

/// Creates a random text of `len` symbols drawn from the first `alphabet` hex digits.
pub fn random_hex_text(seed: u64, len: usize, alphabet: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let digits = HEX_DIGITS.as_bytes();

    (0..len)
        .map(|_| digits[rng.gen_range(0..alphabet)] as char)
        .collect()
}
