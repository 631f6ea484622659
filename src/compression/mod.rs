//! The compression module turns text into a string of '0' and '1' digits and back again.
//!
//! - encode: replace every symbol with its code from the code table. Spaces are copied unchanged.
//! - decode: walk the Huffman tree one digit at a time, emitting a symbol every time a leaf is
//!   reached. Anything that is not a digit is copied unchanged.
//!
//! The output is text, not packed bits.
//!

pub mod decode;
pub mod encode;
