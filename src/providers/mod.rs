//! Upstream collaborators consumed by the game: word, rhyme and synonym
//! services and the leaderboard backend.
//!
//! Every call is bounded by [`with_timeout`]; an elapsed timeout is reported
//! the same way as any other upstream failure.

#![cfg(feature = "std")]

use std::future::Future;
use std::time::Duration;

use crate::core::GameError;

pub mod in_memory;

/// Reference bound on every upstream call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[async_trait::async_trait]
pub trait WordProvider: Send + Sync {
    async fn get_random_word(&self) -> anyhow::Result<String>;
}

#[async_trait::async_trait]
pub trait RhymeProvider: Send + Sync {
    async fn get_rhymes(&self, word: &str) -> anyhow::Result<Vec<String>>;
}

/// Synonyms and antonyms returned by a thesaurus lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Thesaurus {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[async_trait::async_trait]
pub trait SynonymProvider: Send + Sync {
    async fn get_synonyms(&self, word: &str) -> anyhow::Result<Thesaurus>;
}

/// Leaderboard row as stored upstream, with every number as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    pub score: String,
    pub seconds: String,
    /// Level the score was achieved on.
    pub text: String,
    pub date: String,
}

#[async_trait::async_trait]
pub trait LeaderboardBackend: Send + Sync {
    async fn list(&self, public_key: &str) -> anyhow::Result<Vec<RemoteEntry>>;
    async fn add(
        &self,
        private_key: &str,
        name: &str,
        score: u32,
        seconds: u64,
        level: u32,
    ) -> anyhow::Result<()>;
    async fn clear(&self, private_key: &str) -> anyhow::Result<()>;
}

/// Await `fut` for at most `limit`, folding timeouts and failures into
/// [`GameError::NetworkError`].
pub async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T, GameError>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(GameError::NetworkError(e.to_string())),
        Err(_) => Err(GameError::NetworkError(format!(
            "request timed out after {:?}",
            limit
        ))),
    }
}
