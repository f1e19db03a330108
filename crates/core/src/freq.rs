//! Symbol alphabet and frequency counting.
//!
//! The codec operates over a fixed alphabet: byte values in [32, 128),
//! the 96 printable ASCII characters. Bytes outside this range are not
//! part of the alphabet and are silently skipped during counting; this
//! is the declared scope of the codec, not an oversight.
//!
//! # Invariants
//! - `total()` equals the sum of all per-symbol counts
//! - symbols never seen have a count of exactly zero

use crate::error::Result;
use std::io::Read;

/// Lowest byte value in the alphabet (space).
pub const SYMBOL_MIN: u8 = 32;

/// One past the highest byte value in the alphabet.
pub const SYMBOL_LIMIT: u8 = 128;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = (SYMBOL_LIMIT - SYMBOL_MIN) as usize;

/// Map a byte to its index in alphabet-sized arrays.
///
/// Returns `None` for bytes outside [SYMBOL_MIN, SYMBOL_LIMIT).
pub fn symbol_index(byte: u8) -> Option<usize> {
    if (SYMBOL_MIN..SYMBOL_LIMIT).contains(&byte) {
        Some((byte - SYMBOL_MIN) as usize)
    } else {
        None
    }
}

/// Occurrence counts for every symbol in the alphabet.
///
/// Built once per input and read-only afterward. Addressable for all
/// symbols in range; out-of-range lookups return zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Per-symbol counts, indexed by `symbol - SYMBOL_MIN`
    counts: [u64; ALPHABET_SIZE],

    /// Sum of all counts (bytes outside the alphabet are not included)
    total: u64,
}

impl FrequencyTable {
    /// Count symbol occurrences in a byte slice.
    ///
    /// Bytes outside the alphabet are skipped. An empty slice produces
    /// a table where `is_empty()` is true.
    pub fn count(bytes: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        let mut total = 0u64;

        for &byte in bytes {
            if let Some(idx) = symbol_index(byte) {
                counts[idx] += 1;
                total += 1;
            }
        }

        Self { counts, total }
    }

    /// Count symbol occurrences from a byte source.
    ///
    /// # Errors
    /// Propagates any read failure as `Error::Io`. A failed read never
    /// yields a partially counted table.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::count(&bytes))
    }

    /// Occurrence count for a symbol.
    ///
    /// Bytes outside the alphabet have a count of zero.
    pub fn get(&self, symbol: u8) -> u64 {
        symbol_index(symbol).map_or(0, |idx| self.counts[idx])
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols with non-zero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True if no symbol was ever counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(symbol, count)` pairs with non-zero count,
    /// in ascending symbol order.
    pub fn nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(idx, &count)| (SYMBOL_MIN + idx as u8, count))
    }
}
