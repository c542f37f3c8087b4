#![cfg(feature = "std")]

use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::providers::REQUEST_TIMEOUT;

/// Default location of the player's profile store.
pub const DEFAULT_STORE_PATH: &str = "wordguess.json";

/// Runtime settings for a client of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Bound on every upstream call.
    pub request_timeout: Duration,
    pub leaderboard_public_key: Option<String>,
    pub leaderboard_private_key: Option<String>,
    pub store_path: PathBuf,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: REQUEST_TIMEOUT,
            leaderboard_public_key: None,
            leaderboard_private_key: None,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            seed: None,
        }
    }
}

impl ClientConfig {
    /// An RNG from the configured seed, or from OS entropy.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }

    /// Both leaderboard keys, when configured.
    pub fn leaderboard_keys(&self) -> Option<(&str, &str)> {
        match (&self.leaderboard_public_key, &self.leaderboard_private_key) {
            (Some(public), Some(private)) if !public.is_empty() && !private.is_empty() => {
                Some((public.as_str(), private.as_str()))
            }
            _ => None,
        }
    }
}
