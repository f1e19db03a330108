//! Configuration for the hufftext application.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults (including a reproducible sample input when no file is
//! given).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it generates sample text,
//! runs the full pipeline, and verifies the round trip. The seed is
//! printed so runs are reproducible.

use std::path::PathBuf;

/// Complete configuration for a codec run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file path (None = generate sample text)
    pub input_file: Option<PathBuf>,

    /// Seed for sample text generation
    pub seed: u64,

    /// Size of generated sample text in bytes
    pub sample_bytes: usize,

    /// Whether to print the frequency listing
    pub print_frequencies: bool,

    /// Whether to print the code listing
    pub print_codes: bool,

    /// Whether to print the coding summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no --seed is provided, a time-based seed is used (and printed,
    /// so the run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_frequencies = false;
        let mut print_codes = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-frequencies" => {
                    print_frequencies = true;
                }
                "--print-codes" => {
                    print_codes = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input_file,
            seed,
            sample_bytes: sample_bytes.unwrap_or(4096),
            print_frequencies,
            print_codes,
            print_stats,
        })
    }
}

fn print_help() {
    println!("hufftext: Huffman coding for printable ASCII text");
    println!();
    println!("USAGE:");
    println!("    hufftext [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>            Input file (default: generate sample text)");
    println!("    --seed <N>             Seed for sample generation (default: time-based)");
    println!("    --sample-bytes <N>     Size of generated sample (default: 4096)");
    println!();
    println!("    --print-frequencies    Print the '<symbol> <count>' listing");
    println!("    --print-codes          Print the '<symbol> <code>' listing");
    println!("    --no-stats             Don't print the coding summary");
    println!("    --help, -h             Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    hufftext                            # Encode/decode generated sample");
    println!("    hufftext --seed 42 --print-codes    # Deterministic run, show codes");
    println!("    hufftext --in notes.txt             # Encode/decode a specific file");
    println!();
}
