use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::{FrequencyTable, Symbol};

pub type CodeTable = HashMap<Symbol, String>;

/// Node weights are occurrence counts; divide by the input length for the
/// relative frequency.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn frequency(&self, total: u64) -> f64 {
        self.weight() as f64 / total as f64
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

pub type HuffmanTree = Node;

/// Queue entry. `seq` is the insertion order and breaks weight ties: the
/// earliest inserted node is removed first. `seq` is unique per entry, so
/// equality only needs `(weight, seq)`.
struct HeapNode {
    weight: u64,
    seq: usize,
    node: Box<Node>,
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapNode {}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for Min-Heap behavior in BinaryHeap (which is max-heap by default)
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy merge of the two lightest nodes until one remains. A single
/// distinct symbol yields its leaf as the root.
pub fn build_huffman_tree(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut heap = BinaryHeap::with_capacity(frequencies.len());
    let mut seq = 0usize;

    for entry in frequencies.iter() {
        heap.push(HeapNode {
            weight: entry.count,
            seq,
            node: Box::new(Node::Leaf {
                symbol: entry.symbol,
                weight: entry.count,
            }),
        });
        seq += 1;
    }
    debug!("Initial heap size: {}", heap.len());

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };

        let weight = left.weight + right.weight;
        trace!(
            "Merging #{} ({}) with #{} ({}) into #{} ({})",
            left.seq, left.weight, right.seq, right.weight, seq, weight
        );
        let new_node = Node::Internal {
            weight,
            left: left.node,
            right: right.node,
        };
        heap.push(HeapNode {
            weight,
            seq,
            node: Box::new(new_node),
        });
        seq += 1;
    }

    debug!("Tree construction complete.");
    heap.pop()
        .map(|n| *n.node)
        .ok_or(HuffmanError::InvalidInput)
}

/// Assigns `0` for every left edge and `1` for every right edge. A root that
/// is itself a leaf gets the one-bit code `"0"`.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    match root {
        Node::Leaf { symbol, .. } => {
            trace!("Single-symbol tree, assigning '0' to {:?}", symbol);
            table.insert(*symbol, String::from("0"));
        }
        Node::Internal { .. } => assign_codes(root, String::new(), &mut table),
    }
    debug!("Code table built with {} entries.", table.len());
    table
}

fn assign_codes(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to {:?} : '{}'", symbol, prefix);
            table.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", prefix), table);
            assign_codes(right, format!("{}1", prefix), table);
        }
    }
}
