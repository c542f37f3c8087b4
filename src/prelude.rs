//! Commonly used types and utilities for ease of import.

pub use crate::core::{GameError, GameSession, GameStatus, LeaderboardEntry, SessionSnapshot};

pub use crate::providers::{
    in_memory::{InMemoryBackend, Offline, StaticRhymes, StaticThesaurus, StaticWords},
    LeaderboardBackend, RhymeProvider, SynonymProvider, WordProvider,
};
pub use crate::{
    ClientConfig, FixedWord, GameEvent, GameTimer, HintCascade, JsonFileStore, KeyValueStore,
    Leaderboard, MemoryStore, PlayerProfile, SecretWordSource, WordGame, WordSource,
};
