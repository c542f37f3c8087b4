#![cfg(feature = "std")]

//! Text rendering of game state for the terminal.

use std::fmt::Write;

use crate::core::{format_attempts, GameStatus, LeaderboardEntry, SessionSnapshot};
use crate::profile::PlayerStats;

fn masked_word(snapshot: &SessionSnapshot) -> String {
    if snapshot.word_length_revealed {
        vec!["_"; snapshot.secret_word.chars().count()].join(" ")
    } else {
        "?".to_string()
    }
}

/// Status panel for the current session.
pub fn render_status(snapshot: &SessionSnapshot, elapsed: &str) -> String {
    let mut out = String::new();
    let caps = snapshot.capabilities();
    let _ = writeln!(out, "╔══════════════════════════════════════╗");
    let _ = writeln!(
        out,
        "║ Level {:<3} Score {:<4} Time {:<9}║",
        snapshot.level, snapshot.score, elapsed
    );
    let _ = writeln!(out, "╚══════════════════════════════════════╝");
    let _ = writeln!(out, "  Word: {}", masked_word(snapshot));
    let _ = writeln!(out, "  {}", format_attempts(snapshot.attempts_remaining));
    if !snapshot.guess_history.is_empty() {
        let _ = writeln!(out, "  Guesses: {}", snapshot.guess_history.join(", "));
    }
    let mut options = Vec::new();
    if caps.can_check_letter {
        options.push("letter <c> (-5)");
    }
    if caps.can_get_word_length {
        options.push("length (-5)");
    }
    if caps.can_use_hint {
        options.push("hint");
    }
    if !options.is_empty() {
        let _ = writeln!(out, "  Available: {}", options.join(", "));
    }
    match snapshot.status {
        GameStatus::Won => {
            let _ = writeln!(out, "\n🎉🎉🎉 VICTORY! 🎉🎉🎉");
        }
        GameStatus::Lost => {
            let _ = writeln!(out, "\n💀 GAME OVER 💀 The word was {}", snapshot.secret_word);
        }
        GameStatus::Error => {
            let _ = writeln!(out, "\nCould not start the game. Type 'new' to retry.");
        }
        GameStatus::Loading | GameStatus::InProgress => {}
    }
    out
}

pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No scores yet.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<20} {:>6} {:>6} {:>5}  {}",
        "Rank", "Name", "Score", "Time", "Level", "Date"
    );
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>4}  {:<20} {:>6} {:>6} {:>5}  {}",
            entry.rank,
            entry.name,
            entry.score,
            entry.formatted_time(),
            entry.level,
            entry.formatted_date()
        );
    }
    out
}

pub fn render_stats(name: &str, stats: &PlayerStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Player:         {}", name);
    let _ = writeln!(out, "Games played:   {}", stats.games_played);
    let _ = writeln!(out, "Games won:      {}", stats.games_won);
    let _ = writeln!(out, "Win rate:       {:.1}%", stats.win_rate());
    let _ = writeln!(out, "High score:     {}", stats.high_score);
    let _ = writeln!(out, "Average score:  {:.1}", stats.average_score());
    let _ = writeln!(out, "Best time:      {}", stats.formatted_best_time());
    let _ = writeln!(
        out,
        "Streak:         {} (best {})",
        stats.current_streak, stats.best_streak
    );
    out
}

pub const HELP: &str = "\
Commands:
  <word> | guess <word>   guess the secret word (-10 points when wrong)
  letter <c>              count a letter in the word (-5 points)
  length                  reveal the word length once (-5 points)
  hint                    one hint after 5 wrong guesses
  new [level]             start a new game
  reset                   clear the current game
  status                  show the current game
  leaderboard             show the leaderboard
  quit                    leave
";
