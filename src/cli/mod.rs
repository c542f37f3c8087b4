//! Command-line front end
//!
//! This module provides:
//! - Command parsing for the interactive prompt
//! - `CliApp`, which routes commands to the game, profile and leaderboard
//! - Display functions for sessions, leaderboards and statistics

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use std::io::{self, BufRead, Write};

use crate::core::{letter_check_message, parse_letter, GameError, GameStatus, LeaderboardEntry};
use crate::game::{GameEvent, WordGame};
use crate::leaderboard::Leaderboard;
use crate::profile::PlayerProfile;
use crate::store::KeyValueStore;
use tokio::sync::broadcast;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Letter(char),
    Length,
    Hint,
    New(Option<u32>),
    Reset,
    Status,
    Leaderboard,
    Help,
    Quit,
}

/// Parse a prompt line. A lone word that is not a command is a guess.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Please enter a guess!".to_string());
    }
    let (head, rest) = match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "guess" | "g" if rest.is_empty() => return Err("Usage: guess <word>".to_string()),
        "guess" | "g" => Command::Guess(rest.to_string()),
        "letter" | "l" => Command::Letter(parse_letter(rest).map_err(|e| e.user_message())?),
        "length" => Command::Length,
        "hint" => Command::Hint,
        "new" if rest.is_empty() => Command::New(None),
        "new" => Command::New(Some(
            rest.parse()
                .map_err(|_| format!("Invalid level '{}' - must be a number", rest))?,
        )),
        "reset" => Command::Reset,
        "status" | "s" => Command::Status,
        "leaderboard" | "board" => Command::Leaderboard,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ if rest.is_empty() => Command::Guess(head.to_string()),
        _ => return Err(format!("Unknown command '{}' - type 'help'", head)),
    };
    Ok(command)
}

/// Whether the prompt loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive game wiring the session to the player's profile and the
/// leaderboard.
pub struct CliApp<S: KeyValueStore> {
    game: WordGame,
    leaderboard: Leaderboard,
    profile: PlayerProfile<S>,
    events: broadcast::Receiver<GameEvent>,
}

impl<S: KeyValueStore> CliApp<S> {
    pub fn new(game: WordGame, leaderboard: Leaderboard, profile: PlayerProfile<S>) -> Self {
        let events = game.subscribe();
        Self {
            game,
            leaderboard,
            profile,
            events,
        }
    }

    pub fn game(&self) -> &WordGame {
        &self.game
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn profile(&self) -> &PlayerProfile<S> {
        &self.profile
    }

    /// Run one command and return the lines to show.
    pub async fn execute(&mut self, command: Command) -> anyhow::Result<(Flow, Vec<String>)> {
        let mut lines = Vec::new();
        let result: Result<(), GameError> = match command {
            Command::Guess(word) => self.game.submit_guess(&word).await.map(|outcome| {
                lines.push(outcome.message);
            }),
            Command::Letter(letter) => self.game.check_letter(letter).map(|count| {
                lines.push(letter_check_message(letter, count));
            }),
            Command::Length => self.game.word_length().map(|len| {
                lines.push(format!("💡 The word has {} letters!", len));
            }),
            Command::Hint => match self.game.hint().await {
                Ok(hint) => {
                    lines.push(format!("💡 Hint: {}", hint));
                    Ok(())
                }
                Err(GameError::HintUnavailable) => {
                    let wrong = self.game.snapshot().wrong_guesses();
                    lines.push(format!(
                        "Hints available after 5 wrong attempts! ({}/5)",
                        wrong.min(5)
                    ));
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Command::New(level) => {
                let level = level.unwrap_or_else(|| self.profile.current_level());
                self.game.start(level).await.map(|_| {
                    lines.push(format!("Level {}: guess the secret word!", level));
                })
            }
            Command::Reset => {
                self.game.reset();
                lines.push("Game reset. Type 'new' to get a word.".to_string());
                Ok(())
            }
            Command::Status => {
                lines.push(self.status_text());
                Ok(())
            }
            Command::Leaderboard => {
                let report = self.leaderboard.fetch().await;
                if report.is_degraded() {
                    lines.push("Leaderboard unavailable right now.".to_string());
                }
                lines.push(render_leaderboard(&report.value));
                Ok(())
            }
            Command::Help => {
                lines.push(HELP.to_string());
                Ok(())
            }
            Command::Quit => return Ok((Flow::Quit, lines)),
        };
        if let Err(e) = result {
            if e.is_guard_violation() {
                log::debug!("command rejected: {}", e);
            } else {
                log::warn!("command failed: {}", e);
            }
            lines.push(e.user_message());
        }
        self.drain_events(&mut lines).await?;
        Ok((Flow::Continue, lines))
    }

    fn status_text(&self) -> String {
        render_status(&self.game.snapshot(), &self.game.timer().formatted())
    }

    async fn drain_events(&mut self, lines: &mut Vec<String>) -> anyhow::Result<()> {
        while let Ok(event) = self.events.try_recv() {
            match event {
                GameEvent::Won {
                    final_score,
                    completion_time,
                    level,
                } => {
                    let next_level = level.saturating_add(1);
                    self.profile
                        .record_game_result(true, final_score, completion_time)?;
                    self.profile.set_current_level(next_level)?;
                    let entry = LeaderboardEntry::new(
                        self.profile.display_name(),
                        final_score,
                        completion_time.saturating_mul(1000),
                        level,
                        chrono::Local::now().format("%Y-%m-%d").to_string(),
                    );
                    let report = self.leaderboard.submit(entry).await;
                    self.profile.save_leaderboard(&report.value)?;
                    lines.push(self.status_text());
                    lines.push(format!(
                        "Level {} complete with {} points in {}. Type 'new' for level {}.",
                        level,
                        final_score,
                        crate::core::format_elapsed(completion_time),
                        next_level
                    ));
                    if report.is_degraded() {
                        lines.push("Score saved locally; the leaderboard is offline.".to_string());
                    }
                }
                GameEvent::Lost { .. } => {
                    let score = self.game.snapshot().score;
                    self.profile.record_game_result(false, score, 0)?;
                    lines.push(self.status_text());
                }
                // The failed `new` command already reported the reason.
                GameEvent::Error { .. } => {}
            }
        }
        Ok(())
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let (_, lines) = self.execute(Command::New(None)).await?;
        print_lines(&lines);
        let stdin = io::stdin();
        loop {
            if self.game.status() == GameStatus::InProgress {
                println!("{}", self.status_text());
            }
            print!("> ");
            io::stdout().flush()?;
            let mut buf = String::new();
            if stdin.lock().read_line(&mut buf)? == 0 {
                break;
            }
            let command = match parse_command(&buf) {
                Ok(command) => command,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };
            let (flow, lines) = self.execute(command).await?;
            print_lines(&lines);
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
