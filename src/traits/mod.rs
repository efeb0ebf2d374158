//! Hooks invoked by the [compressor](crate::huffman::compressor::HuffmanCompressor) when each
//! stage of the pipeline has been built.

use log::debug;

use crate::huffman::code_table::CodeTable;
use crate::huffman::frequency::FrequencyTable;
use crate::huffman::tree::HuffmanTree;

/// Observes the intermediate structures of a compression. Every method defaults to doing
/// nothing, so implementors only override the stages they care about.
pub trait EncodeObserver {
    fn frequencies_built(&mut self, _freqs: &FrequencyTable) {}

    fn tree_built(&mut self, _tree: &HuffmanTree) {}

    fn code_table_built(&mut self, _table: &CodeTable) {}
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl EncodeObserver for NoopObserver {}

/// Emits every event at debug level through the [`log`] facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl EncodeObserver for LogObserver {
    fn frequencies_built(&mut self, freqs: &FrequencyTable) {
        debug!(
            "frequencies of {} symbols ({} distinct): {}",
            freqs.total(),
            freqs.len(),
            freqs
                .iter()
                .map(|(symbol, freq)| format!("{symbol}:{freq}"))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    fn tree_built(&mut self, tree: &HuffmanTree) {
        debug!(
            "tree with {} leaves, {} internal nodes, depth {}",
            tree.leaf_count(),
            tree.internal_count(),
            tree.depth()
        );
    }

    fn code_table_built(&mut self, table: &CodeTable) {
        debug!("codes: {}", table);
    }
}

impl<O: EncodeObserver + ?Sized> EncodeObserver for &mut O {
    fn frequencies_built(&mut self, freqs: &FrequencyTable) {
        (**self).frequencies_built(freqs)
    }

    fn tree_built(&mut self, tree: &HuffmanTree) {
        (**self).tree_built(tree)
    }

    fn code_table_built(&mut self, table: &CodeTable) {
        (**self).code_table_built(table)
    }
}
