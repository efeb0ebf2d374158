use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{Error, Freq, Result, Symbol};

/// The number of occurrences of each distinct symbol of a text.
///
/// Only symbols that actually occur are present, so every stored frequency is positive. Symbols
/// are enumerated in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    freqs: BTreeMap<Symbol, Freq>,

    /// The sum of all the frequencies, i.e. the length of the text in symbols.
    total: usize,
}

impl FrequencyTable {
    /// Counts the occurrences of every symbol of `text`.
    pub fn count(text: &str) -> Self {
        let freqs = text.chars().counts().into_iter().collect::<BTreeMap<_, _>>();
        let total = freqs.values().sum();

        Self { freqs, total }
    }

    /// Creates a table from explicit `(symbol, frequency)` pairs. Repeated symbols are summed.
    ///
    /// Note: it returns an error if any of the frequencies is zero.
    pub fn from_counts(counts: impl IntoIterator<Item = (Symbol, Freq)>) -> Result<Self> {
        let mut table = Self::default();

        for (symbol, freq) in counts {
            if freq == 0 {
                return Err(Error::ZeroFrequency { symbol });
            }
            *table.freqs.entry(symbol).or_insert(0) += freq;
            table.total += freq;
        }
        Ok(table)
    }

    pub fn get(&self, symbol: Symbol) -> Option<Freq> {
        self.freqs.get(&symbol).copied()
    }

    /// The number of distinct symbols.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Freq)> + '_ {
        self.freqs.iter().map(|(symbol, freq)| (*symbol, *freq))
    }
}
