use log::info;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;

/// Copied straight to the output instead of being encoded. Separates words.
pub const PASSTHROUGH: char = ' ';

/// Encode a line of text with the given code table. Spaces are copied as-is, every other character
/// must have a code or the whole call fails with `UnknownSymbol`.
pub fn encode(text: &str, table: &CodeTable) -> Result<String> {
    let mut out = String::with_capacity(text.len() * 4);

    for (position, symbol) in text.chars().enumerate() {
        if symbol == PASSTHROUGH {
            out.push(symbol);
            continue;
        }
        match table.get(symbol) {
            Some(code) => out.push_str(code),
            None => return Err(HuffError::UnknownSymbol { symbol, position }),
        }
    }

    info!(
        "Encoded {} characters into {} digits",
        text.chars().count(),
        out.len()
    );
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::node::SymbolWeight;
    use crate::huffman_coding::tree::HuffmanTree;

    fn table(pairs: &[(char, f64)]) -> CodeTable {
        let tree = HuffmanTree::build(
            pairs
                .iter()
                .map(|&(c, w)| SymbolWeight::new(c, w).unwrap()),
        )
        .unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn encode_words() {
        let codes = table(&[('A', 0.4), ('B', 0.3), ('C', 0.2), ('D', 0.1)]);
        assert_eq!(encode("ABCD", &codes).unwrap(), "010111110");
        assert_eq!(encode("BAD CAB", &codes).unwrap(), "100110 111010");
        assert_eq!(encode("  ", &codes).unwrap(), "  ");
        assert_eq!(encode("", &codes).unwrap(), "");
    }

    #[test]
    fn single_symbol_encodes_to_nothing() {
        let codes = table(&[('A', 1.0)]);
        assert_eq!(encode("A", &codes).unwrap(), "");
        assert_eq!(encode("A A", &codes).unwrap(), " ");
    }

    #[test]
    fn unknown_symbol() {
        let codes = table(&[('A', 0.4), ('B', 0.3), ('C', 0.2), ('D', 0.1)]);
        match encode("AB X", &codes) {
            Err(HuffError::UnknownSymbol { symbol, position }) => {
                assert_eq!(symbol, 'X');
                assert_eq!(position, 3);
            }
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
        // lower case was never in the table either
        assert!(encode("a", &codes).is_err());
    }
}
