//! Compression statistics for a table/codebook pairing.
//!
//! Computed from the frequency table and the derived codes, without
//! materializing an encoded stream: the encoded length of the input the
//! table was counted from is the sum of `count * code_len` over all
//! symbols.

use crate::codebook::CodeBook;
use crate::freq::FrequencyTable;

/// Size accounting for one counted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodingStats {
    /// Symbols counted (in-alphabet bytes of the input)
    pub input_symbols: u64,

    /// Bits the codebook spends on the counted input
    pub encoded_bits: u64,

    /// Bits a fixed-width 8-bit encoding would spend
    pub fixed_width_bits: u64,
}

impl CodingStats {
    /// Compute stats for the input a table was counted from.
    pub fn measure(table: &FrequencyTable, book: &CodeBook) -> Self {
        let encoded_bits = table
            .nonzero()
            .map(|(symbol, count)| {
                let code_len = book.code(symbol).map_or(0, |c| c.len() as u64);
                count * code_len
            })
            .sum();

        Self {
            input_symbols: table.total(),
            encoded_bits,
            fixed_width_bits: table.total() * 8,
        }
    }

    /// Encoded size relative to the fixed-width baseline (0.0 if empty).
    pub fn compression_ratio(&self) -> f64 {
        if self.fixed_width_bits == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.fixed_width_bits as f64
        }
    }

    /// Mean code length in bits per symbol (0.0 if empty).
    pub fn average_code_length(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.input_symbols as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Coding Summary ===");
        println!("Symbols: {}", self.input_symbols);
        println!("Encoded: {} bits", self.encoded_bits);
        println!("Fixed-width baseline: {} bits", self.fixed_width_bits);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!("Average code length: {:.2} bits/symbol", self.average_code_length());
    }
}
