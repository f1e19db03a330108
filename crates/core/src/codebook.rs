//! Code derivation: mapping symbols to prefix-free bit-strings.
//!
//! Codes come from leaf paths in the tree: taking the left child appends
//! '0', the right child appends '1'. Because every code is the path to a
//! distinct leaf in a binary tree, no code can be a prefix of another.
//!
//! The walk uses an explicit work-list stack rather than recursion, so a
//! degenerate skewed tree cannot exhaust the call stack.

use crate::freq::{symbol_index, ALPHABET_SIZE, SYMBOL_MIN};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Mapping from symbol to its bit-string code.
///
/// Symbols with zero frequency have no entry. Codes are non-empty
/// strings of ASCII '0'/'1' characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook {
    /// Per-symbol codes, indexed by `symbol - SYMBOL_MIN`
    codes: Vec<Option<String>>,
}

impl CodeBook {
    /// Derive a codebook from a built tree.
    ///
    /// A root-is-leaf tree (single-symbol alphabet) gets the one-bit
    /// code "0"; an empty code would be undecodable.
    pub fn derive(tree: &HuffmanTree) -> Self {
        let mut codes: Vec<Option<String>> = vec![None; ALPHABET_SIZE];

        // Work-list walk: each entry is a node plus the path that led to it
        let mut stack: Vec<(&HuffmanNode, String)> = vec![(tree.root(), String::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    let code = if path.is_empty() {
                        // Single-leaf tree: the root itself is the leaf
                        "0".to_string()
                    } else {
                        path
                    };
                    if let Some(idx) = symbol_index(*symbol) {
                        codes[idx] = Some(code);
                    }
                }
                HuffmanNode::Internal { left, right, .. } => {
                    // Push right first so the left branch is visited first
                    stack.push((right.as_ref(), format!("{path}1")));
                    stack.push((left.as_ref(), format!("{path}0")));
                }
            }
        }

        Self { codes }
    }

    /// Look up the code for a symbol.
    ///
    /// Returns `None` for out-of-alphabet bytes and for symbols that had
    /// zero frequency when the tree was built.
    pub fn code(&self, symbol: u8) -> Option<&str> {
        symbol_index(symbol).and_then(|idx| self.codes[idx].as_deref())
    }

    /// Number of symbols with a code (one per leaf in the tree).
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(idx, code)| {
                code.as_deref().map(|c| (SYMBOL_MIN + idx as u8, c))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn codebook_for(input: &[u8]) -> CodeBook {
        let table = FrequencyTable::count(input);
        let tree = HuffmanTree::build(&table).unwrap();
        CodeBook::derive(&tree)
    }

    #[test]
    fn test_one_code_per_seen_symbol() {
        let book = codebook_for(b"abracadabra");
        assert_eq!(book.len(), 5);
        for symbol in [b'a', b'b', b'c', b'd', b'r'] {
            assert!(book.code(symbol).is_some());
        }
        assert!(book.code(b'z').is_none());
    }

    #[test]
    fn test_prefix_free() {
        let book = codebook_for(b"the quick brown fox jumps over the lazy dog");

        let codes: Vec<&str> = book.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_codes_are_bits() {
        let book = codebook_for(b"hello world");
        for (_, code) in book.iter() {
            assert!(!code.is_empty());
            assert!(code.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn test_frequent_symbol_gets_shorter_code() {
        let book = codebook_for(b"aaaaaaaabc");
        let a_len = book.code(b'a').unwrap().len();
        let b_len = book.code(b'b').unwrap().len();
        assert!(a_len < b_len);
    }

    #[test]
    fn test_single_symbol_gets_one_bit_code() {
        let book = codebook_for(b"aaaa");
        assert_eq!(book.code(b'a'), Some("0"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_out_of_alphabet_lookup_is_none() {
        let book = codebook_for(b"abc");
        assert!(book.code(0).is_none());
        assert!(book.code(255).is_none());
    }

    #[test]
    fn test_derivation_deterministic() {
        let table = FrequencyTable::count(b"mississippi");
        let tree = HuffmanTree::build(&table).unwrap();

        let book1 = CodeBook::derive(&tree);
        let book2 = CodeBook::derive(&tree);
        assert_eq!(book1, book2);
    }

    #[test]
    fn test_iter_ascending_symbol_order() {
        let book = codebook_for(b"cab");
        let symbols: Vec<u8> = book.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'a', b'b', b'c']);
    }
}
