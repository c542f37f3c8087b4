//! Core word game engine (no_std compatible)
//!
//! Pure game rules: scoring, the local word table, the session state machine,
//! leaderboard ranking and local hints. Only `alloc` and `rand` are needed, so
//! this module carries no I/O and no clock.

pub mod common;
pub mod config;
pub mod format;
pub mod hint;
pub mod ranking;
pub mod scoring;
pub mod session;
pub mod validation;
pub mod words;

// Re-export commonly used types
pub use common::{GameError, GameStatus};
pub use config::*;
pub use format::{format_attempts, format_elapsed, format_millis, letter_check_message};
pub use hint::local_hint;
pub use ranking::{rank_entries, submit, LeaderboardEntry};
pub use session::{Capabilities, GameSession, GuessOutcome, SessionSnapshot};
pub use validation::{parse_letter, validate_level, validate_player_name};
pub use words::{fallback_word_for_level, fits_level};
