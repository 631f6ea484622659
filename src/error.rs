//! Error types for huffcode

use thiserror::Error;

/// Result type alias for huffcode operations
pub type Result<T> = std::result::Result<T, HuffError>;

/// Errors that can occur while building, encoding or decoding
#[derive(Error, Debug)]
pub enum HuffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot build a Huffman tree from an empty probability table")]
    EmptyInput,

    #[error("Symbol {symbol:?} at position {position} is not in the code table")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Encoding ends mid-code at position {position} ({pending_bits} bits pending)")]
    MalformedEncoding { position: usize, pending_bits: usize },

    #[error("Symbol {0:?} appears more than once in the probability table")]
    DuplicateSymbol(char),

    #[error("Symbol {symbol:?} has invalid weight {weight}")]
    InvalidWeight { symbol: char, weight: f64 },

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}
