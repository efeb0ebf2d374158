use std::fmt::Display;

use bitvec::prelude::*;

use crate::huffman::code_table::CodeTable;
use crate::{Error, Result};

/// The logical bit stream obtained by concatenating the codes of a text, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedBits {
    bits: BitVec,
}

impl EncodedBits {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bitslice(&self) -> &BitSlice {
        &self.bits
    }

    pub fn into_inner(self) -> BitVec {
        self.bits
    }
}

impl Display for EncodedBits {
    /// Writes the stream as a string of `0` and `1`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits.iter() {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Encodes `text` symbol by symbol with the codes of `table`.
///
/// Note: it returns [`Error::MissingCode`] for the first symbol that has no code.
pub fn encode(text: &str, table: &CodeTable) -> Result<EncodedBits> {
    let mut bits = BitVec::with_capacity(text.len() * table.max_code_len());

    for symbol in text.chars() {
        let code = table.get(symbol).ok_or(Error::MissingCode { symbol })?;
        bits.extend_from_bitslice(code);
    }

    Ok(EncodedBits { bits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::FrequencyTable;
    use crate::huffman::tree::HuffmanTree;

    fn table_of(text: &str) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::count(text)).unwrap())
    }

    #[test]
    fn concatenates_codes_in_input_order() {
        let table = table_of("ab");

        assert_eq!(encode("ab", &table).unwrap().to_string(), "01");
        assert_eq!(encode("bba", &table).unwrap().to_string(), "110");
    }

    #[test]
    fn unknown_symbols_are_reported() {
        let table = table_of("ab");
        let result = encode("abc", &table);

        assert!(matches!(result, Err(Error::MissingCode { symbol: 'c' })));
    }

    #[test]
    fn empty_text_gives_empty_stream() {
        let encoded = encode("", &table_of("ab")).unwrap();

        assert!(encoded.is_empty());
        assert_eq!(encoded.to_string(), "");
    }

    #[test]
    fn length_matches_the_code_table_estimate() {
        let text = "deadbeefcafe0123";
        let table = table_of(text);
        let encoded = encode(text, &table).unwrap();

        assert_eq!(encoded.len(), table.encoded_len(&FrequencyTable::count(text)).unwrap());
    }
}
