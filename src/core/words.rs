//! Local secret-word table lookups.

use super::config::{level_band, words_for_level, LEVEL_1_WORDS};
use rand::Rng;

fn pick<R: Rng>(rng: &mut R, bucket: &'static [&'static str]) -> &'static str {
    match bucket.len() {
        0 => LEVEL_1_WORDS[0],
        n => bucket[rng.random_range(0..n)],
    }
}

/// Whether `word` is purely alphabetic and fits the band for `level`.
pub fn fits_level(word: &str, level: u32) -> bool {
    !word.is_empty()
        && word.chars().all(char::is_alphabetic)
        && level_band(level).contains(&word.chars().count())
}

/// Pick a word for `level` from the local table.
///
/// A word outside the level's length band is redrawn once; the second draw is
/// kept whatever its length. Never fails.
pub fn fallback_word_for_level<R: Rng>(rng: &mut R, level: u32) -> &'static str {
    let bucket = words_for_level(level);
    let first = pick(rng, bucket);
    if fits_level(first, level) {
        first
    } else {
        pick(rng, bucket)
    }
}
