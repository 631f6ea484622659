//! Static Huffman coding of text, driven by a table of symbol probabilities.
//!
//! Given a table of symbols and their probabilities, huffcode builds the Huffman tree, derives the
//! prefix-free code for every symbol, encodes lines of text into strings of '0' and '1' digits and
//! decodes them again. Spaces are copied through unencoded so words stay visible in the output.
//!
//! This is not a general purpose compressor: codes are kept as text and never packed into bytes.
//!
//! Basic usage from the command line:
//!
//! `$> huffcode letters.txt -t "HELLO WORLD"`
//!
//! And from code:
//!
//! ```
//! use huffcode::{decode, encode, CodeTable, HuffmanTree, SymbolWeight};
//!
//! let pairs = [('A', 0.4), ('B', 0.3), ('C', 0.2), ('D', 0.1)]
//!     .iter()
//!     .map(|&(c, w)| SymbolWeight::new(c, w))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let tree = HuffmanTree::build(pairs)?;
//! let codes = CodeTable::from_tree(&tree);
//!
//! let encoded = encode("BAD CAB", &codes)?;
//! assert_eq!(encoded, "100110 111010");
//! assert_eq!(decode(&encoded, &tree), "BAD CAB");
//! # Ok::<(), huffcode::HuffError>(())
//! ```
//!
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::decode::{decode, decode_strict, decode_with, TruncationPolicy};
pub use compression::encode::encode;
pub use error::{HuffError, Result};
pub use huffman_coding::code_table::CodeTable;
pub use huffman_coding::node::SymbolWeight;
pub use huffman_coding::tree::HuffmanTree;
