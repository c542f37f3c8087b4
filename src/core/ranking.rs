//! Leaderboard entries and rank computation.

use alloc::{string::String, vec::Vec};

use super::config::LEADERBOARD_SIZE;
use super::format::format_millis;

/// One leaderboard row. `rank` is assigned by [`rank_entries`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    /// Completion time in milliseconds.
    pub time: u64,
    pub level: u32,
    pub date: String,
    pub rank: u32,
}

impl LeaderboardEntry {
    /// A new, unranked entry.
    pub fn new(name: impl Into<String>, score: u32, time: u64, level: u32, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            time,
            level: level.max(1),
            date: date.into(),
            rank: 0,
        }
    }

    pub fn formatted_time(&self) -> String {
        format_millis(self.time)
    }

    /// `YYYY-MM-DD` prefix of the date, or "Today" when none was recorded.
    pub fn formatted_date(&self) -> String {
        if self.date.is_empty() {
            String::from("Today")
        } else {
            self.date.chars().take(10).collect()
        }
    }
}

/// Sort by score descending (ties keep their order), keep the top
/// [`LEADERBOARD_SIZE`] and number ranks from 1.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_SIZE);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }
    entries
}

/// Merge `new_entry` into `entries` and re-rank. The input is left untouched.
pub fn submit(entries: &[LeaderboardEntry], new_entry: LeaderboardEntry) -> Vec<LeaderboardEntry> {
    let mut merged = Vec::with_capacity(entries.len() + 1);
    merged.extend_from_slice(entries);
    merged.push(new_entry);
    rank_entries(merged)
}
