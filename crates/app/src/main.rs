//! hufftext: run the Huffman codec pipeline end to end.
//!
//! Reads a file (or generates sample text), builds the frequency table,
//! tree, and codebook, encodes the input into a '0'/'1' bitstream,
//! decodes it back, and verifies the round trip.

mod config;
mod input_gen;

use config::Config;
use hufftext_core::freq::symbol_index;
use hufftext_core::{codec, report, stats::CodingStats, CodeBook, FrequencyTable, HuffmanTree};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("try 'hufftext --help'");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> hufftext_core::Result<()> {
    // Obtain input bytes: a file, or generated sample text.
    // Read failures propagate; a partial read is never encoded.
    let raw = match &config.input_file {
        Some(path) => {
            println!("Input: {}", path.display());
            std::fs::read(path)?
        }
        None => {
            println!(
                "Input: generated sample ({} bytes, seed {})",
                config.sample_bytes, config.seed
            );
            input_gen::generate_sample_text(config.seed, config.sample_bytes)
        }
    };

    // The codec covers printable ASCII only and refuses to encode
    // anything else, so bytes outside the alphabet (newlines, control
    // codes) are dropped here, visibly, before encoding.
    let input: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|&b| symbol_index(b).is_some())
        .collect();
    let skipped = raw.len() - input.len();
    if skipped > 0 {
        println!("Skipped {skipped} bytes outside the printable alphabet");
    }

    let table = FrequencyTable::count(&input);

    let tree = HuffmanTree::build(&table)?;
    let book = CodeBook::derive(&tree);

    if config.print_frequencies {
        println!("\n=== Frequencies ===");
        print!("{}", report::frequency_listing(&table));
    }

    if config.print_codes {
        println!("\n=== Codes ===");
        print!("{}", report::code_listing(&book));
    }

    let bits = codec::encode(&input, &book)?;
    let decoded = codec::decode(&bits, &tree)?;

    println!();
    if decoded == input {
        println!("Round trip: PASSED ({} symbols)", table.total());
    } else {
        println!("Round trip: FAILED");
        return Ok(());
    }

    if config.print_stats {
        println!();
        CodingStats::measure(&table, &book).print_summary();
    }

    Ok(())
}
