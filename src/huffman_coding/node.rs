//! Building blocks of the Huffman tree: the symbol/weight pair read from the probability table, and
//! the tree node that either holds one of those symbols (a leaf) or owns two subtrees (kids).

use std::fmt::{Display, Formatter};

use crate::error::{HuffError, Result};

/// A symbol and its probability (or frequency). Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolWeight {
    symbol: char,
    weight: f64,
}

impl SymbolWeight {
    /// Create a new pair. Weights must be finite and not negative.
    pub fn new(symbol: char, weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(HuffError::InvalidWeight { symbol, weight });
        }
        Ok(SymbolWeight { symbol, weight })
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Display for SymbolWeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol, self.weight)
    }
}

/// Leaves carry a symbol, everything else carries two children.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// For a leaf this is the original probability, for kids it is the sum of both children.
    pub weight: f64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a single leaf tree from a symbol/weight pair
    pub fn leaf(pair: SymbolWeight) -> Node {
        Node {
            weight: pair.weight,
            node_data: NodeData::Leaf(pair.symbol),
        }
    }

    /// Join two trees under a new parent. `left` was popped first and takes the '0' branch.
    pub fn merge(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol/weight pair of a leaf, None for internal nodes.
    pub fn pair(&self) -> Option<SymbolWeight> {
        match self.node_data {
            NodeData::Leaf(symbol) => Some(SymbolWeight {
                symbol,
                weight: self.weight,
            }),
            NodeData::Kids(..) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_bad_weights() {
        assert!(matches!(
            SymbolWeight::new('A', -0.5),
            Err(HuffError::InvalidWeight { symbol: 'A', .. })
        ));
        assert!(SymbolWeight::new('B', f64::NAN).is_err());
        assert!(SymbolWeight::new('C', f64::INFINITY).is_err());
        assert!(SymbolWeight::new('D', 0.0).is_ok());
    }

    #[test]
    fn display_pair() {
        let pair = SymbolWeight::new('A', 0.4).unwrap();
        assert_eq!(pair.to_string(), "A 0.4");
    }

    #[test]
    fn merge_sums_weights() {
        let a = Node::leaf(SymbolWeight::new('A', 0.25).unwrap());
        let b = Node::leaf(SymbolWeight::new('B', 0.5).unwrap());
        let parent = Node::merge(a.clone(), b.clone());
        assert_eq!(parent.weight, 0.75);
        assert!(!parent.is_leaf());
        assert_eq!(parent.pair(), None);
        match parent.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(*left, a);
                assert_eq!(*right, b);
            }
            NodeData::Leaf(_) => panic!("merged node should have kids"),
        }
    }

    #[test]
    fn leaf_keeps_pair() {
        let pair = SymbolWeight::new('Z', 0.01).unwrap();
        let leaf = Node::leaf(pair);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.pair(), Some(pair));
    }
}
