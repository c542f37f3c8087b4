#![cfg(feature = "std")]

use std::str::FromStr;

use crate::core::{format_elapsed, validate_player_name, GameError, LeaderboardEntry};
use crate::store::KeyValueStore;

const KEY_USER_NAME: &str = "USER_NAME";
const KEY_HIGH_SCORE: &str = "HIGH_SCORE";
const KEY_GAMES_PLAYED: &str = "GAMES_PLAYED";
const KEY_GAMES_WON: &str = "GAMES_WON";
const KEY_TOTAL_SCORE: &str = "TOTAL_SCORE";
const KEY_BEST_TIME: &str = "BEST_TIME";
const KEY_CURRENT_STREAK: &str = "CURRENT_STREAK";
const KEY_BEST_STREAK: &str = "BEST_STREAK";
const KEY_CURRENT_LEVEL: &str = "CURRENT_LEVEL";
const KEY_LEADERBOARD: &str = "LEADERBOARD";

const STAT_KEYS: [&str; 7] = [
    KEY_HIGH_SCORE,
    KEY_GAMES_PLAYED,
    KEY_GAMES_WON,
    KEY_TOTAL_SCORE,
    KEY_BEST_TIME,
    KEY_CURRENT_STREAK,
    KEY_BEST_STREAK,
];

/// Name used on the leaderboard when the player never chose one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Aggregate statistics over all recorded games.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub games_won: u32,
    pub total_score: u64,
    pub high_score: u32,
    /// Fastest win in seconds, 0 when there is none.
    pub best_time: u64,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl PlayerStats {
    /// Percentage of games won.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games_played as f64
        }
    }

    pub fn formatted_best_time(&self) -> String {
        if self.best_time == 0 {
            "--:--".to_string()
        } else {
            format_elapsed(self.best_time)
        }
    }
}

/// Player name, progress and statistics persisted through a [`KeyValueStore`].
pub struct PlayerProfile<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PlayerProfile<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read<T: FromStr + Default>(&self, key: &str) -> T {
        self.store
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    fn write<T: ToString>(&mut self, key: &str, value: T) -> anyhow::Result<()> {
        self.store.set(key, &value.to_string())
    }

    pub fn name(&self) -> Option<String> {
        self.store.get(KEY_USER_NAME).filter(|n| !n.trim().is_empty())
    }

    /// Name to publish scores under.
    pub fn display_name(&self) -> String {
        self.name()
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string())
    }

    pub fn is_first_launch(&self) -> bool {
        self.name().is_none()
    }

    /// Validate and store the player's name.
    pub fn set_name(&mut self, name: &str) -> Result<String, GameError> {
        let name = validate_player_name(name)?;
        self.store
            .set(KEY_USER_NAME, &name)
            .map_err(|e| GameError::UnknownError(e.to_string()))?;
        Ok(name)
    }

    pub fn current_level(&self) -> u32 {
        self.read::<u32>(KEY_CURRENT_LEVEL).max(1)
    }

    pub fn set_current_level(&mut self, level: u32) -> anyhow::Result<()> {
        self.write(KEY_CURRENT_LEVEL, level.max(1))
    }

    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            games_played: self.read(KEY_GAMES_PLAYED),
            games_won: self.read(KEY_GAMES_WON),
            total_score: self.read(KEY_TOTAL_SCORE),
            high_score: self.read(KEY_HIGH_SCORE),
            best_time: self.read(KEY_BEST_TIME),
            current_streak: self.read(KEY_CURRENT_STREAK),
            best_streak: self.read(KEY_BEST_STREAK),
        }
    }

    /// Fold one finished game into the statistics.
    ///
    /// The high score only ever rises and the best time only ever falls.
    pub fn record_game_result(
        &mut self,
        won: bool,
        score: u32,
        completion_secs: u64,
    ) -> anyhow::Result<PlayerStats> {
        let mut stats = self.stats();
        stats.games_played += 1;
        stats.total_score += u64::from(score);
        stats.high_score = stats.high_score.max(score);
        if won {
            stats.games_won += 1;
            stats.current_streak += 1;
            stats.best_streak = stats.best_streak.max(stats.current_streak);
            if completion_secs > 0 && (stats.best_time == 0 || completion_secs < stats.best_time) {
                stats.best_time = completion_secs;
            }
        } else {
            stats.current_streak = 0;
        }

        self.write(KEY_GAMES_PLAYED, stats.games_played)?;
        self.write(KEY_GAMES_WON, stats.games_won)?;
        self.write(KEY_TOTAL_SCORE, stats.total_score)?;
        self.write(KEY_HIGH_SCORE, stats.high_score)?;
        self.write(KEY_BEST_TIME, stats.best_time)?;
        self.write(KEY_CURRENT_STREAK, stats.current_streak)?;
        self.write(KEY_BEST_STREAK, stats.best_streak)?;
        Ok(stats)
    }

    /// Leaderboard rows saved by [`save_leaderboard`](Self::save_leaderboard).
    /// Unreadable data counts as no rows.
    pub fn saved_leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.store
            .get(KEY_LEADERBOARD)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save_leaderboard(&mut self, entries: &[LeaderboardEntry]) -> anyhow::Result<()> {
        let json = serde_json::to_string(entries)?;
        self.store.set(KEY_LEADERBOARD, &json)
    }

    /// Forget statistics, keeping the name and level.
    pub fn clear_statistics(&mut self) -> anyhow::Result<()> {
        for key in STAT_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }

    pub fn clear_all(&mut self) -> anyhow::Result<()> {
        self.store.clear()
    }
}
