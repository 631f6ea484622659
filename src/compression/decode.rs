//! Decode a string of '0'/'1' digits by walking the Huffman tree.
//!
//! The walk is a small state machine. A cursor starts at the root and follows one branch per digit.
//! When it lands on a leaf, that symbol is emitted (just before the next character is looked at, or
//! when the input runs out) and the cursor goes back to the root. Any character that is not a digit
//! is copied to the output and also sends the cursor back to the root.
//!
//! An encoding that stops partway down the tree (cut off at the end, or interrupted by a space)
//! cannot be finished. `TruncationPolicy` decides whether that is dropped with a warning or
//! reported as `MalformedEncoding`.

use log::{info, warn};

use crate::error::{HuffError, Result};
use crate::huffman_coding::node::{Node, NodeData};
use crate::huffman_coding::tree::HuffmanTree;

/// What to do with a code that never reaches a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Throw the partial code away and log a warning
    #[default]
    Drop,
    /// Fail with `MalformedEncoding`
    Reject,
}

/// A partial code the decoder had to give up on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Truncation {
    position: usize,
    pending_bits: usize,
}

struct Decoder<'t> {
    root: &'t Node,
    cursor: &'t Node,
    /// The cursor reached a leaf that has not been emitted yet
    leaf_pending: bool,
    /// Digits followed since the cursor last left the root
    pending_bits: usize,
    text: String,
    truncations: Vec<Truncation>,
}

impl<'t> Decoder<'t> {
    fn new(tree: &'t HuffmanTree) -> Self {
        let root = tree.root();
        Decoder {
            root,
            cursor: root,
            // A tree that is just one leaf has its symbol waiting from the start
            leaf_pending: root.is_leaf(),
            pending_bits: 0,
            text: String::new(),
            truncations: vec![],
        }
    }

    /// Emit the leaf under the cursor, if one is waiting, and go back to the root.
    fn emit_leaf(&mut self) {
        if !self.leaf_pending {
            return;
        }
        if let NodeData::Leaf(symbol) = self.cursor.node_data {
            self.text.push(symbol);
        }
        self.cursor = self.root;
        self.leaf_pending = false;
        self.pending_bits = 0;
    }

    fn reset(&mut self) {
        self.cursor = self.root;
        self.leaf_pending = self.root.is_leaf();
        self.pending_bits = 0;
    }

    fn step(&mut self, position: usize, ch: char) {
        self.emit_leaf();
        match ch {
            '0' | '1' => match &self.cursor.node_data {
                NodeData::Kids(left, right) => {
                    self.cursor = if ch == '0' { &**left } else { &**right };
                    self.pending_bits += 1;
                    self.leaf_pending = self.cursor.is_leaf();
                }
                // Only a single leaf tree gets here: there is no branch for the digit to follow
                NodeData::Leaf(_) => self.truncations.push(Truncation {
                    position,
                    pending_bits: 1,
                }),
            },
            literal => {
                if self.pending_bits > 0 {
                    self.truncations.push(Truncation {
                        position,
                        pending_bits: self.pending_bits,
                    });
                }
                self.text.push(literal);
                self.reset();
            }
        }
    }

    fn finish(mut self, end: usize) -> (String, Vec<Truncation>) {
        if self.leaf_pending {
            self.emit_leaf();
        } else if self.pending_bits > 0 {
            self.truncations.push(Truncation {
                position: end,
                pending_bits: self.pending_bits,
            });
        }
        (self.text, self.truncations)
    }
}

fn run(encoded: &str, tree: &HuffmanTree) -> (String, Vec<Truncation>) {
    let mut decoder = Decoder::new(tree);
    let mut end = 0;
    for (position, ch) in encoded.chars().enumerate() {
        decoder.step(position, ch);
        end = position + 1;
    }
    decoder.finish(end)
}

/// Decode with the tree that built the code. Partial codes are dropped with a warning, so this
/// never fails.
pub fn decode(encoded: &str, tree: &HuffmanTree) -> String {
    let (text, truncations) = run(encoded, tree);
    for t in &truncations {
        warn!(
            "Dropped a partial code of {} bits at position {}",
            t.pending_bits, t.position
        );
    }
    info!("Decoded {} characters", text.chars().count());
    text
}

/// Decode, failing with `MalformedEncoding` at the first partial code.
pub fn decode_strict(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    let (text, truncations) = run(encoded, tree);
    match truncations.first() {
        Some(t) => Err(HuffError::MalformedEncoding {
            position: t.position,
            pending_bits: t.pending_bits,
        }),
        None => {
            info!("Decoded {} characters", text.chars().count());
            Ok(text)
        }
    }
}

pub fn decode_with(encoded: &str, tree: &HuffmanTree, policy: TruncationPolicy) -> Result<String> {
    match policy {
        TruncationPolicy::Drop => Ok(decode(encoded, tree)),
        TruncationPolicy::Reject => decode_strict(encoded, tree),
    }
}
