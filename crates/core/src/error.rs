//! Error types for the hufftext codec.
//!
//! All operations return structured errors rather than panicking.
//! Each stage of the pipeline has its own error domain so callers can
//! tell construction failures apart from encode/decode failures.

use thiserror::Error;

/// Top-level error type for all operations in the codec.
///
/// Each variant corresponds to a specific failure domain:
/// - Build: tree construction from a frequency table
/// - Encode: byte-to-bitstream transformation
/// - Decode: bitstream-to-byte transformation
/// - I/O: reading bytes from an input source
#[derive(Debug, Error)]
pub enum Error {
    /// Tree construction failed (e.g., nothing to build from)
    #[error("tree build error: {0}")]
    Build(#[from] BuildError),

    /// Encoding failed (e.g., byte with no code)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Decoding failed (e.g., malformed bitstream)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Reading from the byte source failed.
    ///
    /// Read failures are surfaced to the caller; they are never treated
    /// as "zero bytes read".
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tree construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty frequency table: no symbols to build a tree from")]
    EmptyInput,
}

/// Encoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A byte in the input has no entry in the codebook, either because
    /// it lies outside the alphabet or because it had zero frequency
    /// when the tree was built.
    #[error("unencodable symbol {symbol:#04x} at input offset {position}")]
    UnencodableSymbol { symbol: u8, position: usize },
}

/// Decoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The bitstream contained a character other than '0' or '1'
    #[error("invalid bit {bit:?} at bitstream offset {position}")]
    InvalidBit { bit: char, position: usize },

    /// The bitstream ended in the middle of a code (cursor not at a leaf)
    #[error("truncated bitstream: input ended mid-code at bit {position}")]
    TruncatedStream { position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
