//! Human-readable listings of frequency tables and codebooks.
//!
//! Presentation only; nothing here participates in the encode/decode
//! contract. Both listings are one line per symbol, in ascending symbol
//! order, covering only symbols actually present.

use crate::codebook::CodeBook;
use crate::freq::FrequencyTable;
use std::fmt::Write;

/// Format a frequency table as "<symbol> <count>" lines.
///
/// Only symbols with non-zero count appear.
pub fn frequency_listing(table: &FrequencyTable) -> String {
    let mut out = String::new();
    for (symbol, count) in table.nonzero() {
        let _ = writeln!(out, "{} {}", symbol as char, count);
    }
    out
}

/// Format a codebook as "<symbol> <code>" lines.
///
/// Only symbols with a code appear.
pub fn code_listing(book: &CodeBook) -> String {
    let mut out = String::new();
    for (symbol, code) in book.iter() {
        let _ = writeln!(out, "{} {}", symbol as char, code);
    }
    out
}
