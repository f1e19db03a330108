//! Encoding and decoding against a built tree/codebook pairing.
//!
//! The encoded form is a string of ASCII '0' and '1' characters, one per
//! bit, deliberately not packed into bytes. No header or tree
//! serialization is defined; the decoder needs the same in-memory tree
//! the codebook was derived from.
//!
//! Both directions are fallible: an input byte without a code is an
//! encode error, and a bitstream that does not resolve cleanly into
//! symbols is a decode error. Nothing is silently skipped or truncated.

use crate::codebook::CodeBook;
use crate::error::{DecodeError, EncodeError, Result};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Encode a byte sequence into a '0'/'1' bitstream string.
///
/// Codes are appended in input order.
///
/// # Errors
/// Returns `EncodeError::UnencodableSymbol` for any byte with no
/// codebook entry (out-of-alphabet, or zero frequency at build time).
pub fn encode(input: &[u8], book: &CodeBook) -> Result<String> {
    let mut bits = String::new();

    for (position, &byte) in input.iter().enumerate() {
        match book.code(byte) {
            Some(code) => bits.push_str(code),
            None => {
                return Err(EncodeError::UnencodableSymbol {
                    symbol: byte,
                    position,
                }
                .into())
            }
        }
    }

    Ok(bits)
}

/// Decode a '0'/'1' bitstream string back into bytes.
///
/// A cursor walks the tree from the root: '0' descends left, '1'
/// descends right. Reaching a leaf emits its symbol and resets the
/// cursor to the root.
///
/// For a root-is-leaf tree (single-symbol alphabet) every bit emits
/// that one symbol, matching the one-bit code the codebook assigns.
///
/// # Errors
/// - `DecodeError::InvalidBit` for any character other than '0' or '1'
/// - `DecodeError::TruncatedStream` if the input ends mid-code
pub fn decode(bits: &str, tree: &HuffmanTree) -> Result<Vec<u8>> {
    // Single-leaf tree: there is no branch to walk
    if let HuffmanNode::Leaf { symbol, .. } = tree.root() {
        let mut output = Vec::with_capacity(bits.len());
        for (position, bit) in bits.chars().enumerate() {
            if bit != '0' && bit != '1' {
                return Err(DecodeError::InvalidBit { bit, position }.into());
            }
            output.push(*symbol);
        }
        return Ok(output);
    }

    let mut output = Vec::new();
    let mut cursor = tree.root();

    for (position, bit) in bits.chars().enumerate() {
        let (left, right) = match cursor {
            HuffmanNode::Internal { left, right, .. } => (left.as_ref(), right.as_ref()),
            // Cursor is reset to the root after every emission and the
            // root is internal here, so a leaf cursor is unreachable
            HuffmanNode::Leaf { .. } => unreachable!("cursor resets to root at each leaf"),
        };

        cursor = match bit {
            '0' => left,
            '1' => right,
            _ => return Err(DecodeError::InvalidBit { bit, position }.into()),
        };

        if let HuffmanNode::Leaf { symbol, .. } = cursor {
            output.push(*symbol);
            cursor = tree.root();
        }
    }

    // The cursor must have come to rest at the root; anything else
    // means the stream ended in the middle of a code
    if !std::ptr::eq(cursor, tree.root()) {
        return Err(DecodeError::TruncatedStream {
            position: bits.len(),
        }
        .into());
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::freq::FrequencyTable;

    fn pipeline(input: &[u8]) -> (HuffmanTree, CodeBook) {
        let table = FrequencyTable::count(input);
        let tree = HuffmanTree::build(&table).unwrap();
        let book = CodeBook::derive(&tree);
        (tree, book)
    }

    #[test]
    fn test_round_trip() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let (tree, book) = pipeline(input);

        let bits = encode(input, &book).unwrap();
        let decoded = decode(&bits, &tree).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_empty_input_encodes_to_empty_bits() {
        let (tree, book) = pipeline(b"ab");

        let bits = encode(b"", &book).unwrap();
        assert!(bits.is_empty());
        assert_eq!(decode(&bits, &tree).unwrap(), b"");
    }

    #[test]
    fn test_unencodable_symbol() {
        let (_, book) = pipeline(b"abc");

        let result = encode(b"abz", &book);
        assert!(matches!(
            result,
            Err(Error::Encode(EncodeError::UnencodableSymbol {
                symbol: b'z',
                position: 2,
            }))
        ));
    }

    #[test]
    fn test_out_of_alphabet_rejected() {
        let (_, book) = pipeline(b"abc");

        let result = encode(&[0], &book);
        assert!(matches!(
            result,
            Err(Error::Encode(EncodeError::UnencodableSymbol {
                symbol: 0,
                position: 0,
            }))
        ));
    }

    #[test]
    fn test_truncated_stream() {
        let (tree, book) = pipeline(b"abracadabra");

        // 'c' appears once, so its code is multi-bit; appending a strict
        // proper prefix of it leaves the stream mid-code
        let c_code = book.code(b'c').unwrap().to_string();
        assert!(c_code.len() >= 2);

        let mut bits = encode(b"abra", &book).unwrap();
        bits.push_str(&c_code[..c_code.len() - 1]);

        let result = decode(&bits, &tree);
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::TruncatedStream { .. }))
        ));
    }

    #[test]
    fn test_invalid_bit_character() {
        let (tree, _) = pipeline(b"abracadabra");

        let result = decode("0102", &tree);
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::InvalidBit { bit: '2', .. }))
        ));
    }

    #[test]
    fn test_single_symbol_round_trip() {
        let input = b"aaaa";
        let (tree, book) = pipeline(input);

        let bits = encode(input, &book).unwrap();
        assert_eq!(bits, "0000");
        assert_eq!(decode(&bits, &tree).unwrap(), input);
    }

    #[test]
    fn test_single_symbol_tree_accepts_any_bits() {
        let (tree, _) = pipeline(b"aaaa");

        // One symbol per bit regardless of bit value
        assert_eq!(decode("1111", &tree).unwrap(), b"aaaa");
        assert_eq!(decode("0101", &tree).unwrap(), b"aaaa");
    }

    #[test]
    fn test_decode_empty_bits() {
        let (tree, _) = pipeline(b"abc");
        assert_eq!(decode("", &tree).unwrap(), b"");
    }
}
