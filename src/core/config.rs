use core::ops::RangeInclusive;

/// Score every session starts with.
pub const INITIAL_SCORE: u32 = 100;
/// Wrong guesses allowed before the session is lost.
pub const MAX_ATTEMPTS: u32 = 10;
/// Points deducted for every wrong guess.
pub const GUESS_PENALTY: u32 = 10;
pub const LETTER_CHECK_COST: u32 = 5;
pub const WORD_LENGTH_COST: u32 = 5;
/// Wrong guesses required before the hint unlocks.
pub const HINT_THRESHOLD: u32 = 5;
pub const MAX_HINTS: u32 = 1;
pub const MIN_GUESS_LEN: usize = 2;
/// Number of entries kept on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 20;

pub const LEVEL_1_WORDS: [&str; 10] = [
    "cat", "dog", "sun", "moon", "star", "book", "tree", "fish", "bird", "door",
];
pub const LEVEL_2_WORDS: [&str; 10] = [
    "house", "water", "green", "happy", "world", "music", "light", "phone", "table", "chair",
];
pub const LEVEL_3_WORDS: [&str; 8] = [
    "computer", "elephant", "mountain", "rainbow", "butterfly", "treasure", "keyboard", "sandwich",
];
pub const LEVEL_4_WORDS: [&str; 6] = [
    "incredible",
    "magnificent",
    "extraordinary",
    "understanding",
    "responsibility",
    "transformation",
];

/// Fallback bucket for `level`. Levels above 4 share the last bucket and
/// level 0 is treated as level 1.
pub fn words_for_level(level: u32) -> &'static [&'static str] {
    match level {
        0 | 1 => &LEVEL_1_WORDS,
        2 => &LEVEL_2_WORDS,
        3 => &LEVEL_3_WORDS,
        _ => &LEVEL_4_WORDS,
    }
}

/// Required secret-word length for `level`.
pub fn level_band(level: u32) -> RangeInclusive<usize> {
    match level {
        0 | 1 => 4..=5,
        2 => 6..=7,
        3 => 8..=9,
        _ => 10..=12,
    }
}
