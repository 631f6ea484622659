//! Derive the symbol -> bitstring lookup table from a finished Huffman tree.
//!
//! Every code is the path from the root to a leaf, '0' for each left branch and '1' for each right
//! branch. Since codes only ever end at leaves, no code can be the prefix of another.

use std::fmt::{Display, Formatter};

use log::{info, trace};
use rustc_hash::FxHashMap;

use super::node::{Node, NodeData};
use super::tree::HuffmanTree;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable {
    codes: FxHashMap<char, String>,
}

impl CodeTable {
    /// Walk the tree depth first and record the path to every leaf. A tree that is a single leaf
    /// gives that symbol the empty code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = FxHashMap::default();
        let mut stack: Vec<(&Node, String)> = vec![(tree.root(), String::new())];

        while let Some((node, prefix)) = stack.pop() {
            match &node.node_data {
                NodeData::Leaf(symbol) => {
                    trace!("{:?} -> {}", symbol, prefix);
                    codes.insert(*symbol, prefix);
                }
                NodeData::Kids(left, right) => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push('1');
                    let mut left_prefix = prefix;
                    left_prefix.push('0');
                    stack.push((&**right, right_prefix));
                    stack.push((&**left, left_prefix));
                }
            }
        }
        info!("Derived {} Huffman codes", codes.len());
        CodeTable { codes }
    }

    /// The code for a symbol, if the symbol was in the probability table
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (symbol, code) entries sorted by symbol
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        let mut entries = self
            .codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_str()))
            .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries.into_iter()
    }

    /// True when no code starts with another complete code.
    pub fn is_prefix_free(&self) -> bool {
        let codes = self.codes.values().collect::<Vec<_>>();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a.as_str()))
        })
    }
}

impl Display for CodeTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{}\t{}", symbol, code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::node::SymbolWeight;

    fn tree(table: &[(char, f64)]) -> HuffmanTree {
        HuffmanTree::build(
            table
                .iter()
                .map(|&(c, w)| SymbolWeight::new(c, w).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn four_symbol_codes() {
        let codes = CodeTable::from_tree(&tree(&[('A', 0.4), ('B', 0.3), ('C', 0.2), ('D', 0.1)]));
        assert_eq!(codes.len(), 4);
        assert_eq!(codes.get('A'), Some("0"));
        assert_eq!(codes.get('B'), Some("10"));
        assert_eq!(codes.get('D'), Some("110"));
        assert_eq!(codes.get('C'), Some("111"));
        assert_eq!(codes.get('E'), None);
    }

    #[test]
    fn single_symbol_gets_empty_code() {
        let codes = CodeTable::from_tree(&tree(&[('A', 1.0)]));
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get('A'), Some(""));
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn prefix_free() {
        let letters = [
            ('E', 12.7),
            ('T', 9.1),
            ('A', 8.2),
            ('O', 7.5),
            ('I', 7.0),
            ('N', 6.7),
            ('S', 6.3),
            ('H', 6.1),
            ('R', 6.0),
            ('D', 4.3),
            ('L', 4.0),
            ('C', 2.8),
            ('U', 2.8),
            ('M', 2.4),
            ('W', 2.4),
            ('F', 2.2),
            ('G', 2.0),
            ('Y', 2.0),
            ('P', 1.9),
            ('B', 1.5),
            ('V', 1.0),
            ('K', 0.8),
            ('J', 0.15),
            ('X', 0.15),
            ('Q', 0.1),
            ('Z', 0.07),
        ];
        let tree = tree(&letters);
        let codes = CodeTable::from_tree(&tree);
        assert_eq!(codes.len(), letters.len());
        assert!(codes.is_prefix_free());
        // code lengths are leaf depths
        for (pair, depth) in tree.leaves() {
            assert_eq!(codes.get(pair.symbol()).map(str::len), Some(depth));
        }
        // heavier symbols never get longer codes than lighter ones
        for &(a, wa) in &letters {
            for &(b, wb) in &letters {
                if wa > wb {
                    assert!(codes.get(a).unwrap().len() <= codes.get(b).unwrap().len());
                }
            }
        }
    }

    #[test]
    fn detects_prefixes() {
        let mut codes = CodeTable::default();
        codes.codes.insert('A', "0".to_string());
        codes.codes.insert('B', "01".to_string());
        assert!(!codes.is_prefix_free());
    }

    #[test]
    fn display_sorted_by_symbol() {
        let codes = CodeTable::from_tree(&tree(&[('A', 0.4), ('B', 0.3), ('C', 0.2), ('D', 0.1)]));
        assert_eq!(codes.to_string(), "A\t0\nB\t10\nC\t111\nD\t110\n");
    }
}
