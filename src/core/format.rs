//! Display formatting for times, attempts and check results.

use alloc::{format, string::String};

/// `MM:SS` for a number of whole seconds.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `MM:SS` for a duration in milliseconds.
pub fn format_millis(ms: u64) -> String {
    format_elapsed(ms / 1000)
}

pub fn format_attempts(attempts: u32) -> String {
    match attempts {
        0 => String::from("No attempts left"),
        1 => String::from("1 attempt left"),
        n => format!("{} attempts left", n),
    }
}

/// Player-facing result of a letter check.
pub fn letter_check_message(letter: char, count: u32) -> String {
    match count {
        0 => format!("❌ Letter '{}' is not in the word! (-5 points)", letter),
        1 => format!("✅ Letter '{}' appears once in the word! (-5 points)", letter),
        n => format!("✅ Letter '{}' appears {} times in the word! (-5 points)", letter, n),
    }
}
