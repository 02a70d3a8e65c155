//! Word supply.

use std::io::{self, BufRead};

use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

/// Words used when none are given on the command line.
pub const DEMO_WORDS: [&str; 5] = ["Gomogay", "Morgen", "Africa", "Gomontron", "Knopochka"];

/// Reads one word per line.
///
/// Surrounding whitespace is trimmed; blank lines and lines starting with `#`
/// are skipped.
///
/// # Errors
///
/// Returns any error produced by the reader.
pub fn read_words<R>(reader: R) -> io::Result<Vec<String>>
where
    R: BufRead,
{
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_owned());
    }
    Ok(words)
}

/// Returns the demo word list.
#[must_use]
pub fn demo_words() -> Vec<String> {
    DEMO_WORDS.iter().map(|&word| word.to_owned()).collect()
}

/// Shuffles `words` deterministically from `seed`.
///
/// The same seed always yields the same order, so a layout can be reproduced.
pub fn shuffle_words(words: &mut [String], seed: u64) {
    let mut rng = Pcg64::seed_from_u64(seed);
    words.shuffle(&mut rng);
}
