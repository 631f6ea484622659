//! The huffman_coding module turns a probability table into a Huffman tree and a code table.
//!
//! Building happens in two steps:
//! - tree: greedily merge the two lightest trees until a single tree remains.
//! - code_table: walk the finished tree and record the '0'/'1' path to every leaf.
//!
//! The tree is built once and is only read afterwards. Encoding uses the code table, decoding walks
//! the tree directly (see the compression module).
//!

pub mod code_table;
pub mod merge_queue;
pub mod node;
pub mod tree;
