//! Sample text generation for demonstration runs.
//!
//! When no input file is specified, we generate printable ASCII text
//! with a skewed symbol distribution, so the variable-length code has
//! something to gain over the fixed-width baseline.
//!
//! # Design
//!
//! Generated text mixes:
//! - word-like runs drawn from a small weighted letter pool
//! - spaces and punctuation at natural-looking rates
//! - occasional digits and symbols from the wider alphabet
//!
//! All output stays inside the codec's alphabet [32, 128).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letters weighted roughly by English frequency; repeats raise weight.
const LETTER_POOL: &[u8] = b"eeeeeeettttttaaaaaooooiiiinnnnssssrrrrhhhhdddlllcccummmffppggwwyybbvkxjqz";

/// Generate sample text with a skewed symbol distribution.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: exact size of the generated text
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        // A word of weighted letters
        let word_len = rng.gen_range(2..=9);
        for _ in 0..word_len {
            let idx = rng.gen_range(0..LETTER_POOL.len());
            data.push(LETTER_POOL[idx]);
        }

        // Occasional punctuation, digit, or wider-alphabet symbol
        match rng.gen_range(0..20) {
            0 => data.push(b'.'),
            1 => data.push(b','),
            2 => data.push(rng.gen_range(b'0'..=b'9')),
            3 => data.push(rng.gen_range(32..128)),
            _ => {}
        }

        data.push(b' ');
    }

    // Truncate to exact size
    data.truncate(size_bytes);
    data
}
