//! Hint generation as an ordered chain of strategies.
//!
//! Each [`HintStrategy`] proposes candidate hints for the secret word. The
//! [`HintCascade`] asks them in order, picks one candidate at random from the
//! first strategy that returns any, and otherwise ends with the local hint,
//! which cannot fail.

#![cfg(feature = "std")]

use std::time::Duration;

use rand::Rng;

use crate::core::hint::{local_hint, rhyme_hint, synonym_hint};
use crate::providers::{with_timeout, RhymeProvider, SynonymProvider, REQUEST_TIMEOUT};

#[async_trait::async_trait]
pub trait HintStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Raw candidates for `word`; empty means "nothing to offer".
    async fn candidates(&self, word: &str) -> anyhow::Result<Vec<String>>;

    /// Turn a chosen candidate into player-facing text.
    fn phrase(&self, candidate: &str) -> String;
}

pub struct RhymeHint {
    provider: Box<dyn RhymeProvider>,
}

impl RhymeHint {
    pub fn new(provider: Box<dyn RhymeProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl HintStrategy for RhymeHint {
    fn name(&self) -> &'static str {
        "rhyme"
    }

    async fn candidates(&self, word: &str) -> anyhow::Result<Vec<String>> {
        self.provider.get_rhymes(word).await
    }

    fn phrase(&self, candidate: &str) -> String {
        rhyme_hint(candidate)
    }
}

pub struct SynonymHint {
    provider: Box<dyn SynonymProvider>,
}

impl SynonymHint {
    pub fn new(provider: Box<dyn SynonymProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl HintStrategy for SynonymHint {
    fn name(&self) -> &'static str {
        "synonym"
    }

    async fn candidates(&self, word: &str) -> anyhow::Result<Vec<String>> {
        Ok(self.provider.get_synonyms(word).await?.synonyms)
    }

    fn phrase(&self, candidate: &str) -> String {
        synonym_hint(candidate)
    }
}

/// Strategies tried in order, terminated by the local hint.
pub struct HintCascade {
    strategies: Vec<Box<dyn HintStrategy>>,
    timeout: Duration,
}

impl Default for HintCascade {
    /// Local hints only.
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HintCascade {
    pub fn new(strategies: Vec<Box<dyn HintStrategy>>) -> Self {
        Self {
            strategies,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Rhymes first, then synonyms.
    pub fn standard(rhymes: Box<dyn RhymeProvider>, synonyms: Box<dyn SynonymProvider>) -> Self {
        Self::new(vec![
            Box::new(RhymeHint::new(rhymes)),
            Box::new(SynonymHint::new(synonyms)),
        ])
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Produce a hint for `word`. Never fails.
    pub async fn generate<R: Rng + Send>(&self, rng: &mut R, word: &str) -> String {
        for strategy in &self.strategies {
            match with_timeout(self.timeout, strategy.candidates(word)).await {
                Ok(candidates) => {
                    let candidates: Vec<&String> =
                        candidates.iter().filter(|c| !c.trim().is_empty()).collect();
                    if candidates.is_empty() {
                        log::debug!("{} hint had no candidates", strategy.name());
                        continue;
                    }
                    let pick = candidates[rng.random_range(0..candidates.len())];
                    return strategy.phrase(pick.trim());
                }
                Err(e) => {
                    log::warn!("{} hint failed, falling through: {}", strategy.name(), e);
                }
            }
        }
        local_hint(rng, word)
    }
}
