use std::ops::Neg;

use crate::huffman::code_table::CodeTable;
use crate::huffman::frequency::FrequencyTable;

/// Given the frequencies of a distribution summing up to `total_freq`, calculates its Shannon
/// entropy in bits per symbol.
pub fn entropy(distr: &[usize], total_freq: f64) -> f64 {
    let mut entropy = 0.0;

    for freq in distr {
        if *freq == 0 { continue; }
        let pr = *freq as f64 / total_freq;
        entropy += pr * f64::log2(pr);
    }
    entropy.neg()
}

/// Given the real probability distributions P and Q, calculates the cross entropy as follow:
/// ```text
/// cross-entropy(P|Q) = - ∑ p(x) * log(q(x))
/// ```
pub fn cross_entropy(distr: &[usize], m: f64, other_distr: &[usize], other_m: f64) -> f64 {
    assert_eq!(distr.len(), other_distr.len(), "Distr must have same length!");

    let mut cross_entropy = 0.0;

    for index in 0..distr.len() {
        if distr[index] == 0 { continue; }
        let p_x = distr[index] as f64 / m;
        let q_x = other_distr[index] as f64 / other_m;
        cross_entropy += p_x * f64::log2(q_x);
    }
    cross_entropy.neg()
}

/// The minimum number of bits any symbol code can spend on a text with the given frequencies,
/// i.e. its entropy times its length.
pub fn entropy_bits(freqs: &FrequencyTable) -> f64 {
    let distr = freqs.iter().map(|(_, freq)| freq).collect::<Vec<usize>>();
    entropy(&distr, freqs.total() as f64) * freqs.total() as f64
}

/// The distribution implied by a prefix code, where a symbol with a code of length `l` has
/// probability `2^-l`. Frequencies are returned for the symbols of `freqs`, in the same order, and
/// are scaled to sum up to `2^max_code_len` when the code is complete.
///
/// Symbols without a code get frequency zero.
pub fn code_distribution(table: &CodeTable, freqs: &FrequencyTable) -> (Vec<usize>, f64) {
    let max_len = table.max_code_len();
    let distr = freqs
        .iter()
        .map(|(symbol, _)| match table.get(symbol) {
            Some(code) => 1usize << (max_len - code.len()),
            None => 0,
        })
        .collect::<Vec<usize>>();

    (distr, (1usize << max_len) as f64)
}
