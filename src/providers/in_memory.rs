#![cfg(feature = "std")]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{
    LeaderboardBackend, RemoteEntry, RhymeProvider, SynonymProvider, Thesaurus, WordProvider,
};

/// Serves words from a fixed list, in order, wrapping around.
pub struct StaticWords {
    words: Vec<String>,
    next: AtomicUsize,
}

impl StaticWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl WordProvider for StaticWords {
    async fn get_random_word(&self) -> anyhow::Result<String> {
        if self.words.is_empty() {
            return Err(anyhow::anyhow!("word list is empty"));
        }
        let idx = self.next.fetch_add(1, Ordering::SeqCst) % self.words.len();
        Ok(self.words[idx].clone())
    }
}

fn key(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Rhymes looked up from a fixed table; unknown words have none.
#[derive(Default)]
pub struct StaticRhymes {
    table: HashMap<String, Vec<String>>,
}

impl StaticRhymes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, word: &str, rhymes: &[&str]) -> Self {
        self.table
            .insert(key(word), rhymes.iter().map(|r| r.to_string()).collect());
        self
    }
}

#[async_trait::async_trait]
impl RhymeProvider for StaticRhymes {
    async fn get_rhymes(&self, word: &str) -> anyhow::Result<Vec<String>> {
        Ok(self.table.get(&key(word)).cloned().unwrap_or_default())
    }
}

/// Thesaurus entries looked up from a fixed table.
#[derive(Default)]
pub struct StaticThesaurus {
    table: HashMap<String, Thesaurus>,
}

impl StaticThesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, word: &str, synonyms: &[&str], antonyms: &[&str]) -> Self {
        self.table.insert(
            key(word),
            Thesaurus {
                synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
                antonyms: antonyms.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }
}

#[async_trait::async_trait]
impl SynonymProvider for StaticThesaurus {
    async fn get_synonyms(&self, word: &str) -> anyhow::Result<Thesaurus> {
        Ok(self.table.get(&key(word)).cloned().unwrap_or_default())
    }
}

/// Leaderboard storage shared between clones, guarded by a key pair.
#[derive(Clone)]
pub struct InMemoryBackend {
    public_key: String,
    private_key: String,
    entries: Arc<Mutex<Vec<RemoteEntry>>>,
}

impl InMemoryBackend {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed the backend with existing rows.
    pub fn with_entries(self, entries: Vec<RemoteEntry>) -> Self {
        if let Ok(mut stored) = self.entries.lock() {
            *stored = entries;
        }
        self
    }

    pub fn entries(&self) -> Vec<RemoteEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn store(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Vec<RemoteEntry>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("leaderboard storage poisoned"))
    }
}

#[async_trait::async_trait]
impl LeaderboardBackend for InMemoryBackend {
    async fn list(&self, public_key: &str) -> anyhow::Result<Vec<RemoteEntry>> {
        if public_key != self.public_key {
            return Err(anyhow::anyhow!("invalid public key"));
        }
        Ok(self.store()?.clone())
    }

    async fn add(
        &self,
        private_key: &str,
        name: &str,
        score: u32,
        seconds: u64,
        level: u32,
    ) -> anyhow::Result<()> {
        if private_key != self.private_key {
            return Err(anyhow::anyhow!("invalid private key"));
        }
        self.store()?.push(RemoteEntry {
            name: name.to_string(),
            score: score.to_string(),
            seconds: seconds.to_string(),
            text: level.to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        });
        Ok(())
    }

    async fn clear(&self, private_key: &str) -> anyhow::Result<()> {
        if private_key != self.private_key {
            return Err(anyhow::anyhow!("invalid private key"));
        }
        self.store()?.clear();
        Ok(())
    }
}

/// Collaborator with no connectivity: every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

fn offline<T>() -> anyhow::Result<T> {
    Err(anyhow::anyhow!("No internet connection"))
}

#[async_trait::async_trait]
impl WordProvider for Offline {
    async fn get_random_word(&self) -> anyhow::Result<String> {
        offline()
    }
}

#[async_trait::async_trait]
impl RhymeProvider for Offline {
    async fn get_rhymes(&self, _word: &str) -> anyhow::Result<Vec<String>> {
        offline()
    }
}

#[async_trait::async_trait]
impl SynonymProvider for Offline {
    async fn get_synonyms(&self, _word: &str) -> anyhow::Result<Thesaurus> {
        offline()
    }
}

#[async_trait::async_trait]
impl LeaderboardBackend for Offline {
    async fn list(&self, _public_key: &str) -> anyhow::Result<Vec<RemoteEntry>> {
        offline()
    }

    async fn add(
        &self,
        _private_key: &str,
        _name: &str,
        _score: u32,
        _seconds: u64,
        _level: u32,
    ) -> anyhow::Result<()> {
        offline()
    }

    async fn clear(&self, _private_key: &str) -> anyhow::Result<()> {
        offline()
    }
}
