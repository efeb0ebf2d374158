use std::cmp::{max, Ordering, Reverse};
use std::collections::BinaryHeap;

use log::trace;

use crate::huffman::frequency::FrequencyTable;
use crate::{Error, Freq, Result, Symbol};

/// A node of a Huffman tree. Internal nodes exclusively own their two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        freq: Freq,
    },
    Internal {
        /// The sum of the frequencies of the two children.
        freq: Freq,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> Freq {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + max(left.depth(), right.depth()),
        }
    }
}

/// A node waiting in the priority queue, together with its tie-breaking sequence number.
#[derive(Debug)]
struct Pending {
    seq: usize,
    node: Node,
}

impl Pending {
    fn key(&self) -> (Freq, usize) {
        (self.node.freq(), self.seq)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A full binary tree whose leaves are the symbols of a [`FrequencyTable`].
///
/// Nodes are combined by increasing `(frequency, sequence)` where leaves get sequence numbers
/// `0..k` in ascending symbol order and internal nodes get `k, k + 1, ...` in creation order.
/// Of the two combined nodes, the smaller one becomes the left child. The resulting tree
/// depends only on the frequencies, never on the iteration order of any map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Builds the tree of the given frequencies.
    ///
    /// Note: it returns [`Error::EmptyInput`] if the table has no symbols. A table with a single
    /// symbol gives a tree made of one leaf.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        let mut queue = freqs
            .iter()
            .enumerate()
            .map(|(seq, (symbol, freq))| Reverse(Pending { seq, node: Node::Leaf { symbol, freq } }))
            .collect::<BinaryHeap<_>>();

        let mut next_seq = queue.len();

        loop {
            let Some(Reverse(left)) = queue.pop() else {
                return Err(Error::EmptyInput);
            };
            let Some(Reverse(right)) = queue.pop() else {
                return Ok(Self { root: left.node });
            };

            let freq = left.node.freq() + right.node.freq();
            trace!(
                "combining #{} ({}) and #{} ({}) into #{} ({})",
                left.seq,
                left.node.freq(),
                right.seq,
                right.node.freq(),
                next_seq,
                freq
            );

            queue.push(Reverse(Pending {
                seq: next_seq,
                node: Node::Internal {
                    freq,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            }));
            next_seq += 1;
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The frequency of the root, i.e. the length of the text the tree was built from.
    pub fn weight(&self) -> Freq {
        self.root.freq()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// The number of internal nodes. Since the tree is full, it is always `leaf_count() - 1`.
    pub fn internal_count(&self) -> usize {
        self.leaf_count() - 1
    }

    /// The length of the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
