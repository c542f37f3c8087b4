//! Hint phrasing and the local hint that needs no collaborators.

use alloc::{format, string::String};
use rand::Rng;

pub fn rhyme_hint(rhyme: &str) -> String {
    format!("Rhymes with: {}", rhyme)
}

pub fn synonym_hint(synonym: &str) -> String {
    format!("Similar to: {}", synonym)
}

/// Build a hint from the secret word alone, choosing uniformly among length,
/// first letter, last letter, middle letter and a category nudge.
pub fn local_hint<R: Rng>(rng: &mut R, word: &str) -> String {
    let len = word.chars().count();
    let (first, last, middle) = match (word.chars().next(), word.chars().last()) {
        (Some(first), Some(last)) => (first, last, word.chars().nth(len / 2).unwrap_or(last)),
        _ => return String::from("Think about words in this category"),
    };
    match rng.random_range(0..5u8) {
        0 => format!("The word has {} letters", len),
        1 => format!("It starts with '{}'", first),
        2 => format!("It ends with '{}'", last),
        3 => format!("It contains the letter '{}'", middle),
        _ => String::from("Think about words in this category"),
    }
}
