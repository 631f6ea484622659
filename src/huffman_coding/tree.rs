//! Greedy construction of the Huffman tree.
//!
//! Every symbol starts as its own single leaf tree in a min-weight queue. The two lightest trees
//! are repeatedly taken off the queue and joined under a new parent, which goes back on the queue.
//! When one tree is left, that is the Huffman tree. Equal weights are taken in insertion order
//! (see [`MergeQueue`]), so the same table always produces the same tree.

use std::fmt::{Display, Formatter};

use log::{debug, info};
use rustc_hash::FxHashSet;

use super::merge_queue::MergeQueue;
use super::node::{Node, NodeData, SymbolWeight};
use crate::error::{HuffError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree {
    root: Node,
}

fn node_weight(node: &Node) -> f64 {
    node.weight
}

impl HuffmanTree {
    /// Build the tree from symbol/weight pairs, in table order. Fails on an empty table or when a
    /// symbol shows up twice.
    pub fn build<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = SymbolWeight>,
    {
        let mut seen = FxHashSet::default();
        let mut queue = MergeQueue::new(node_weight);

        for pair in pairs {
            if !seen.insert(pair.symbol()) {
                return Err(HuffError::DuplicateSymbol(pair.symbol()));
            }
            queue.push(Node::leaf(pair));
        }
        info!("Building the Huffman tree from {} symbols", queue.len());

        // Keep merging the two lightest trees until only the root is left
        while let Some((left, right)) = queue.pop_pair() {
            let parent = Node::merge(left, right);
            debug!(
                "Merged weights into {} ({} trees left)",
                parent.weight,
                queue.len() + 1
            );
            queue.push(parent);
        }

        let root = queue.pop().ok_or(HuffError::EmptyInput)?;
        info!("Huffman tree complete, total weight {}", root.weight);
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Weight of the root, the sum of every leaf weight
    pub fn weight(&self) -> f64 {
        self.root.weight
    }

    /// Every leaf with its depth, left to right.
    pub fn leaves(&self) -> Vec<(SymbolWeight, usize)> {
        let mut leaves = vec![];
        let mut stack = vec![(&self.root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    stack.push((&**right, depth + 1));
                    stack.push((&**left, depth + 1));
                }
                NodeData::Leaf(_) => {
                    if let Some(pair) = node.pair() {
                        leaves.push((pair, depth));
                    }
                }
            }
        }
        leaves
    }

    pub fn symbol_count(&self) -> usize {
        self.leaves().len()
    }

    /// Sum of depth * weight over all leaves. Depth is the code length, so for probabilities this
    /// is the expected number of bits per symbol.
    pub fn weighted_path_length(&self) -> f64 {
        self.leaves()
            .iter()
            .map(|(pair, depth)| *depth as f64 * pair.weight())
            .sum()
    }

    pub fn print_structure(&self) {
        println!("Huffman Tree Structure:");
        print!("{}", self);
    }
}

/// Recursive helper for Display. One line per node, children indented under their parent.
fn write_node(f: &mut Formatter<'_>, node: &Node, depth: usize, label: &str) -> std::fmt::Result {
    let indent = "  ".repeat(depth);
    match &node.node_data {
        NodeData::Leaf(symbol) => {
            writeln!(
                f,
                "{}{}-> Leaf: {:?} [weight: {}]",
                indent, label, symbol, node.weight
            )
        }
        NodeData::Kids(left, right) => {
            writeln!(f, "{}{}-> Internal [weight: {}]", indent, label, node.weight)?;
            write_node(f, left, depth + 1, "0")?;
            write_node(f, right, depth + 1, "1")
        }
    }
}

impl Display for HuffmanTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_node(f, &self.root, 0, "root")
    }
}
