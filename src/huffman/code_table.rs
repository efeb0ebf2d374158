use std::collections::BTreeMap;
use std::fmt::Display;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::huffman::frequency::FrequencyTable;
use crate::huffman::tree::{HuffmanTree, Node};
use crate::{Error, Result, Symbol};

/// The code of a symbol. The first bit is the first one to be emitted.
pub type Code = BitVec;

/// Maps each symbol of a [`HuffmanTree`] to the path from the root to its leaf, with `0` for a
/// left descent and `1` for a right descent.
///
/// When the tree is a single leaf its symbol gets the code `0`, so that no code is ever empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        match tree.root() {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, bitvec![0]);
            }
            root => Self::assign(root, &mut BitVec::new(), &mut codes),
        }

        Self { codes }
    }

    fn assign(node: &Node, path: &mut Code, codes: &mut BTreeMap<Symbol, Code>) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, path.clone());
            }
            Node::Internal { left, right, .. } => {
                path.push(false);
                Self::assign(left, path, codes);
                path.pop();

                path.push(true);
                Self::assign(right, path, codes);
                path.pop();
            }
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&BitSlice> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over the `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitSlice)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code.as_bitslice()))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// Whether no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        self.codes
            .values()
            .tuple_combinations()
            .all(|(a, b)| !a.starts_with(b.as_bitslice()) && !b.starts_with(a.as_bitslice()))
    }

    /// The number of bits needed to encode a text with the given frequencies, i.e. the sum of
    /// `freq * code length` over all its symbols.
    pub fn encoded_len(&self, freqs: &FrequencyTable) -> Result<usize> {
        freqs.iter().try_fold(0, |bits, (symbol, freq)| {
            let code = self.get(symbol).ok_or(Error::MissingCode { symbol })?;
            Ok(bits + freq * code.len())
        })
    }
}

impl Display for CodeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (symbol, code) in self.iter() {
            write!(f, "{symbol}:")?;
            for bit in code {
                write!(f, "{}", if *bit { '1' } else { '0' })?;
            }
            write!(f, " ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(bits: &str) -> Code {
        bits.chars().map(|bit| bit == '1').collect()
    }

    fn table_of(text: &str) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::count(text)).unwrap())
    }

    #[test]
    fn two_symbols_get_one_bit_each() {
        let table = table_of("ab");

        assert_eq!(table.get('a'), Some(code("0").as_bitslice()));
        assert_eq!(table.get('b'), Some(code("1").as_bitslice()));
    }

    #[test]
    fn single_symbol_gets_a_one_bit_code() {
        let table = table_of("cccccc");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get('c'), Some(code("0").as_bitslice()));
    }

    #[test]
    fn codes_follow_the_tree_paths() {
        // e:8 wins its tie against the internal node holding the other four symbols.
        let freqs = FrequencyTable::from_counts([('a', 1), ('b', 1), ('c', 2), ('d', 4), ('e', 8)]).unwrap();
        let table = CodeTable::from_tree(&HuffmanTree::build(&freqs).unwrap());

        assert_eq!(table.get('e'), Some(code("0").as_bitslice()));
        assert_eq!(table.get('d'), Some(code("10").as_bitslice()));
        assert_eq!(table.get('c'), Some(code("110").as_bitslice()));
        assert_eq!(table.get('a'), Some(code("1110").as_bitslice()));
        assert_eq!(table.get('b'), Some(code("1111").as_bitslice()));
        assert_eq!(table.max_code_len(), 4);
        assert_eq!(table.encoded_len(&freqs).unwrap(), 30);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn prefix_check_detects_prefixes() {
        let mut table = table_of("abc");
        assert!(table.is_prefix_free());

        table.codes.insert('z', BitVec::new());
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn encoded_len_fails_on_unknown_symbols() {
        let table = table_of("ab");
        let result = table.encoded_len(&FrequencyTable::count("abx"));

        assert!(matches!(result, Err(Error::MissingCode { symbol: 'x' })));
    }

    #[test]
    fn displays_symbols_and_codes() {
        assert_eq!(table_of("aab").to_string(), "a:1 b:0 ");
    }
}
