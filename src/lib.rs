#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod game;
#[cfg(feature = "std")]
pub mod hint;
#[cfg(feature = "std")]
pub mod leaderboard;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod profile;
#[cfg(feature = "std")]
pub mod providers;
#[cfg(feature = "std")]
pub mod store;
#[cfg(feature = "std")]
pub mod timer;
#[cfg(feature = "std")]
pub mod word_source;

pub use crate::core::{
    GameError, GameSession, GameStatus, GuessOutcome, LeaderboardEntry, SessionSnapshot,
};

#[cfg(feature = "std")]
pub use config::ClientConfig;
#[cfg(feature = "std")]
pub use game::{GameEvent, WordGame};
#[cfg(feature = "std")]
pub use hint::HintCascade;
#[cfg(feature = "std")]
pub use leaderboard::{Leaderboard, Report};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use profile::{PlayerProfile, PlayerStats};
#[cfg(feature = "std")]
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
#[cfg(feature = "std")]
pub use timer::GameTimer;
#[cfg(feature = "std")]
pub use word_source::{FixedWord, SecretWordSource, WordSource};
