//! The tools module provides the helpers around the Huffman core: getting options from the user and
//! reading the probability table.
//!
//! The tools are:
//! - cli: Command line interface and the options it produces.
//! - prob_table: Read the `<symbol><TAB><probability>` table file.
//!
pub mod cli;
pub mod prob_table;
