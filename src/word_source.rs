#![cfg(feature = "std")]

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{fallback_word_for_level, fits_level};
use crate::providers::{with_timeout, WordProvider, REQUEST_TIMEOUT};

/// Anything that can hand the game a secret word for a level.
#[async_trait::async_trait]
pub trait SecretWordSource: Send {
    async fn fetch_word_for_level(&mut self, level: u32) -> anyhow::Result<String>;
}

/// Secret words from the local table, optionally preferring a remote provider.
///
/// The remote word is used only when it arrives in time and fits the level's
/// length band; otherwise the local table answers. This source never fails.
pub struct WordSource {
    remote: Option<Box<dyn WordProvider>>,
    timeout: Duration,
    rng: SmallRng,
}

impl WordSource {
    /// Local table only.
    pub fn new(rng: SmallRng) -> Self {
        Self {
            remote: None,
            timeout: REQUEST_TIMEOUT,
            rng,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn with_remote(mut self, remote: Box<dyn WordProvider>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn remote_word(&self, level: u32) -> Option<String> {
        let remote = self.remote.as_ref()?;
        match with_timeout(self.timeout, remote.get_random_word()).await {
            Ok(word) if fits_level(word.trim(), level) => Some(word.trim().to_string()),
            Ok(word) => {
                log::debug!("remote word {:?} does not fit level {}", word, level);
                None
            }
            Err(e) => {
                log::warn!("remote word provider failed, using local table: {}", e);
                None
            }
        }
    }

    /// Word for `level`; falls back to the local table on any remote trouble.
    pub async fn word_for_level(&mut self, level: u32) -> String {
        if let Some(word) = self.remote_word(level).await {
            return word;
        }
        fallback_word_for_level(&mut self.rng, level).to_string()
    }
}

#[async_trait::async_trait]
impl SecretWordSource for WordSource {
    async fn fetch_word_for_level(&mut self, level: u32) -> anyhow::Result<String> {
        Ok(self.word_for_level(level).await)
    }
}

/// Always hands out the same word.
#[derive(Debug, Clone)]
pub struct FixedWord(pub String);

impl FixedWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

#[async_trait::async_trait]
impl SecretWordSource for FixedWord {
    async fn fetch_word_for_level(&mut self, _level: u32) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }
}
