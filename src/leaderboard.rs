//! Leaderboard service: the process-wide ranked collection plus an optional
//! remote backend.
//!
//! Upstream failures never reach the display layer as errors. Fetch degrades
//! to the empty collection, submit keeps the local echo, and clear always
//! empties locally; the failure itself rides along in [`Report::error`].

#![cfg(feature = "std")]

use std::time::Duration;

use tokio::sync::watch;

use crate::core::{rank_entries, submit, GameError, LeaderboardEntry};
use crate::providers::{with_timeout, LeaderboardBackend, RemoteEntry, REQUEST_TIMEOUT};

/// A value that is always usable, plus the upstream failure behind it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<T> {
    pub value: T,
    pub error: Option<GameError>,
}

impl<T> Report<T> {
    fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    fn degraded(value: T, error: GameError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

impl From<RemoteEntry> for LeaderboardEntry {
    fn from(remote: RemoteEntry) -> Self {
        let seconds: u64 = remote.seconds.trim().parse().unwrap_or(0);
        LeaderboardEntry::new(
            remote.name,
            remote.score.trim().parse().unwrap_or(0),
            seconds.saturating_mul(1000),
            remote.text.trim().parse().unwrap_or(1),
            remote.date,
        )
    }
}

pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    loading: watch::Sender<bool>,
    backend: Option<Box<dyn LeaderboardBackend>>,
    public_key: String,
    private_key: String,
    timeout: Duration,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::local()
    }
}

impl Leaderboard {
    /// A leaderboard kept only in this process.
    pub fn local() -> Self {
        Self {
            entries: Vec::new(),
            loading: watch::channel(false).0,
            backend: None,
            public_key: String::new(),
            private_key: String::new(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// A leaderboard mirrored to `backend` with the given key pair.
    pub fn remote(
        backend: Box<dyn LeaderboardBackend>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            backend: Some(backend),
            public_key: public_key.into(),
            private_key: private_key.into(),
            ..Self::local()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start from previously saved rows, re-ranked.
    pub fn with_entries(mut self, entries: Vec<LeaderboardEntry>) -> Self {
        self.entries = rank_entries(entries);
        self
    }

    /// Current ranked collection.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Observe the loading flag; it is `true` while a backend call is pending.
    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Refresh from the backend when there is one.
    pub async fn fetch(&mut self) -> Report<Vec<LeaderboardEntry>> {
        let Some(backend) = self.backend.as_ref() else {
            return Report::ok(self.entries.clone());
        };
        self.loading.send_replace(true);
        let result = with_timeout(self.timeout, backend.list(&self.public_key)).await;
        self.loading.send_replace(false);
        match result {
            Ok(remote) => {
                self.entries = rank_entries(remote.into_iter().map(Into::into).collect());
                Report::ok(self.entries.clone())
            }
            Err(e) => {
                log::warn!("leaderboard fetch failed: {}", e);
                self.entries.clear();
                Report::degraded(Vec::new(), e)
            }
        }
    }

    /// Rank a new score locally, then forward it to the backend.
    pub async fn submit(&mut self, entry: LeaderboardEntry) -> Report<Vec<LeaderboardEntry>> {
        let seconds = entry.time / 1000;
        let (name, score, level) = (entry.name.clone(), entry.score, entry.level);
        self.entries = submit(&self.entries, entry);
        log::info!("{} scored {} on level {}", name, score, level);

        let Some(backend) = self.backend.as_ref() else {
            return Report::ok(self.entries.clone());
        };
        self.loading.send_replace(true);
        let result = with_timeout(
            self.timeout,
            backend.add(&self.private_key, &name, score, seconds, level),
        )
        .await;
        self.loading.send_replace(false);
        match result {
            Ok(()) => Report::ok(self.entries.clone()),
            Err(e) => {
                log::warn!("leaderboard submit failed, keeping local entry: {}", e);
                Report::degraded(self.entries.clone(), e)
            }
        }
    }

    /// Empty the collection here and upstream.
    pub async fn clear(&mut self) -> Report<()> {
        self.entries.clear();
        let Some(backend) = self.backend.as_ref() else {
            return Report::ok(());
        };
        self.loading.send_replace(true);
        let result = with_timeout(self.timeout, backend.clear(&self.private_key)).await;
        self.loading.send_replace(false);
        match result {
            Ok(()) => Report::ok(()),
            Err(e) => {
                log::warn!("leaderboard clear failed upstream: {}", e);
                Report::degraded((), e)
            }
        }
    }
}
