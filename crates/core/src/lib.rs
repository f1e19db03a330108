//! hufftext-core: Huffman coding for printable ASCII text
//!
//! This library builds a prefix-free variable-length binary code for the
//! printable ASCII alphabet (byte values 32-127) from observed symbol
//! frequencies, then transforms text into a '0'/'1' bitstream string and
//! back.
//!
//! # Pipeline
//!
//! bytes -> `FrequencyTable` -> `HuffmanTree` -> `CodeBook`
//! -> encode / decode (both against the same tree/codebook pairing)
//!
//! - `freq`: symbol alphabet and frequency counting
//! - `tree`: weight-ordered tree construction over a min-heap
//! - `codebook`: code derivation by work-list tree traversal
//! - `codec`: encoding and decoding
//! - `report`: frequency and code listings (presentation only)
//! - `stats`: compression accounting
//!
//! # Design Principles
//!
//! - **No panics**: all failure modes are structured errors
//! - **Immutable once built**: a tree/codebook pair never changes and may
//!   be read concurrently without locking
//! - **Nothing silent**: unencodable bytes, malformed bitstreams, and
//!   read failures are surfaced to the caller, never skipped
//!
//! # Example
//!
//! ```
//! use hufftext_core::{codec, CodeBook, FrequencyTable, HuffmanTree};
//!
//! let input = b"abracadabra";
//! let table = FrequencyTable::count(input);
//! let tree = HuffmanTree::build(&table)?;
//! let book = CodeBook::derive(&tree);
//!
//! let bits = codec::encode(input, &book)?;
//! let decoded = codec::decode(&bits, &tree)?;
//! assert_eq!(decoded, input);
//! # Ok::<(), hufftext_core::Error>(())
//! ```

pub mod codebook;
pub mod codec;
pub mod error;
pub mod freq;
pub mod report;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use codebook::CodeBook;
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use tree::HuffmanTree;
