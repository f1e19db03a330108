//! Huffman tree construction.
//!
//! A tree is built once from a stable frequency table snapshot and is
//! immutable afterward. It is the single shared source of truth between
//! code derivation and decoding.
//!
//! # Construction
//!
//! A min-heap is seeded with one leaf per non-zero-frequency symbol, in
//! ascending symbol order. The two lightest nodes are repeatedly merged
//! into an internal node whose weight is their sum, until one node
//! remains: the root. The node popped first becomes the left child.
//!
//! # Determinism
//!
//! Heap entries carry a monotonically increasing sequence number used as
//! a tie-break when weights are equal, so equal-weight nodes pop in
//! insertion order. Given the same frequency table, the tree shape is
//! identical across runs and implementations.

use crate::error::{BuildError, Result};
use crate::freq::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node in a Huffman tree.
///
/// Internal nodes always have exactly two children and carry no symbol;
/// leaves carry a symbol and have no children. The tree exclusively owns
/// its node graph (strictly nested, no sharing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A symbol with its occurrence count
    Leaf { symbol: u8, weight: u64 },

    /// A merge of two subtrees; weight is the sum of both children
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Aggregate frequency weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// True if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// A heap entry pairing a node with its extraction priority.
///
/// Used internally by `HuffmanTree::build`.
#[derive(Debug)]
struct HeapEntry {
    weight: u64,
    /// Insertion sequence number; breaks weight ties deterministically
    seq: u64,
    node: HuffmanNode,
}

// Implement ordering for the heap (min-heap: lightest node first,
// then earliest inserted)
impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower weight = higher priority)
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// An immutable Huffman coding tree over the printable alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build a tree from a frequency table.
    ///
    /// If exactly one symbol has non-zero frequency, the tree is a single
    /// leaf with no internal node; code derivation and decoding handle
    /// this shape explicitly.
    ///
    /// # Errors
    /// Returns `BuildError::EmptyInput` if no symbol has a non-zero count.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(BuildError::EmptyInput.into());
        }

        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        // Seed leaves in ascending symbol order so weight ties among
        // leaves break by symbol value
        for (symbol, weight) in frequencies.nonzero() {
            heap.push(HeapEntry {
                weight,
                seq,
                node: HuffmanNode::Leaf { symbol, weight },
            });
            seq += 1;
        }

        // Merge the two lightest nodes until one remains
        while heap.len() > 1 {
            let first = heap.pop().expect("heap has at least two entries");
            let second = heap.pop().expect("heap has at least two entries");

            let weight = first.weight + second.weight;
            heap.push(HeapEntry {
                weight,
                seq,
                node: HuffmanNode::Internal {
                    weight,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            seq += 1;
        }

        let root = heap.pop().expect("heap has exactly one entry").node;
        Ok(Self { root })
    }

    /// The root node of the tree.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total weight of the tree (sum of all input frequencies).
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }
}
