//! Single-game state machine.
//!
//! A [`GameSession`] owns one secret word and the score, attempt and
//! paid-action budgets that evolve as the player acts. Status moves
//! `Loading -> InProgress -> {Won, Lost}` or `Loading -> Error`; terminal
//! sessions are replaced, never revived. Every operation either applies all
//! of its field changes or none of them.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use super::{
    common::{GameError, GameStatus},
    config::{
        INITIAL_SCORE, LETTER_CHECK_COST, MAX_ATTEMPTS, MAX_HINTS, MIN_GUESS_LEN,
        WORD_LENGTH_COST,
    },
    scoring,
    validation::validate_level,
};

/// Read-only projection of a session's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub secret_word: String,
    pub score: u32,
    pub attempts_remaining: u32,
    pub guess_history: Vec<String>,
    pub level: u32,
    pub hints_used: u32,
    pub letter_checks_used: u32,
    pub word_length_revealed: bool,
    pub status: GameStatus,
    /// Milliseconds since the Unix epoch when play began, 0 before that.
    pub time_started: u64,
}

/// Actions currently affordable, derived from the snapshot fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    pub can_use_hint: bool,
    pub can_check_letter: bool,
    pub can_get_word_length: bool,
}

impl SessionSnapshot {
    pub fn capabilities(&self) -> Capabilities {
        let playing = self.status == GameStatus::InProgress;
        Capabilities {
            can_use_hint: playing
                && scoring::hint_unlocked(self.attempts_remaining, self.hints_used),
            can_check_letter: playing && self.score >= LETTER_CHECK_COST,
            can_get_word_length: playing
                && self.score >= WORD_LENGTH_COST
                && !self.word_length_revealed,
        }
    }

    pub fn wrong_guesses(&self) -> u32 {
        scoring::wrong_guesses(self.attempts_remaining)
    }
}

/// Result of a submitted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessOutcome {
    pub correct: bool,
    pub snapshot: SessionSnapshot,
    pub message: String,
}

/// State of one game round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret_word: String,
    score: u32,
    attempts_remaining: u32,
    guess_history: Vec<String>,
    level: u32,
    hints_used: u32,
    letter_checks_used: u32,
    word_length_revealed: bool,
    status: GameStatus,
    time_started: u64,
}

impl Default for GameSession {
    /// Pre-start configuration: full budgets, no word, `InProgress`.
    fn default() -> Self {
        Self {
            secret_word: String::new(),
            score: INITIAL_SCORE,
            attempts_remaining: MAX_ATTEMPTS,
            guess_history: Vec::new(),
            level: 1,
            hints_used: 0,
            letter_checks_used: 0,
            word_length_revealed: false,
            status: GameStatus::InProgress,
            time_started: 0,
        }
    }
}

impl GameSession {
    /// A session waiting for its secret word.
    pub fn loading(level: u32) -> Self {
        Self {
            level: level.max(1),
            status: GameStatus::Loading,
            ..Self::default()
        }
    }

    /// Begin play with `word` at `level`, started at `now_ms`.
    pub fn begin(word: &str, level: u32, now_ms: u64) -> Result<Self, GameError> {
        let level = validate_level(level)?;
        let word = word.trim();
        if word.is_empty() {
            return Err(GameError::InvalidInput("Secret word is empty".to_string()));
        }
        Ok(Self {
            secret_word: word.to_uppercase(),
            level,
            status: GameStatus::InProgress,
            time_started: now_ms,
            ..Self::default()
        })
    }

    /// A session that could not obtain a secret word.
    pub fn failed(level: u32) -> Self {
        Self {
            level: level.max(1),
            status: GameStatus::Error,
            ..Self::default()
        }
    }

    /// Discard all progress and return to the pre-start configuration.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guess_history(&self) -> &[String] {
        &self.guess_history
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            secret_word: self.secret_word.clone(),
            score: self.score,
            attempts_remaining: self.attempts_remaining,
            guess_history: self.guess_history.clone(),
            level: self.level,
            hints_used: self.hints_used,
            letter_checks_used: self.letter_checks_used,
            word_length_revealed: self.word_length_revealed,
            status: self.status,
            time_started: self.time_started,
        }
    }

    /// Restore a session from a snapshot, clamping budgets and the hint count
    /// into range.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            secret_word: snapshot.secret_word.to_uppercase(),
            score: snapshot.score.min(INITIAL_SCORE),
            attempts_remaining: snapshot.attempts_remaining.min(MAX_ATTEMPTS),
            guess_history: snapshot.guess_history,
            level: snapshot.level.max(1),
            hints_used: snapshot.hints_used.min(MAX_HINTS),
            letter_checks_used: snapshot.letter_checks_used,
            word_length_revealed: snapshot.word_length_revealed,
            status: snapshot.status,
            time_started: snapshot.time_started,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.snapshot().capabilities()
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status == GameStatus::InProgress {
            Ok(())
        } else {
            Err(GameError::GameNotInProgress)
        }
    }

    /// Submit a guess for the secret word.
    ///
    /// The trimmed guess is always appended to the history. A correct guess
    /// wins without penalty; a wrong one costs points and an attempt and loses
    /// the game once either budget reaches zero.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        self.ensure_in_progress()?;
        let guess = guess.trim();
        if guess.is_empty() {
            return Err(GameError::InvalidInput("Please enter a guess!".to_string()));
        }
        if guess.chars().count() < MIN_GUESS_LEN {
            return Err(GameError::InvalidInput(
                "Guess must be at least 2 characters!".to_string(),
            ));
        }

        self.guess_history.push(guess.to_string());

        if guess.to_uppercase() == self.secret_word {
            self.status = GameStatus::Won;
            return Ok(GuessOutcome {
                correct: true,
                snapshot: self.snapshot(),
                message: "🎉 Congratulations! You guessed it!".to_string(),
            });
        }

        let (score, attempts) = scoring::apply_wrong_guess(self.score, self.attempts_remaining);
        self.score = score;
        self.attempts_remaining = attempts;
        let message = if scoring::is_exhausted(score, attempts) {
            self.status = GameStatus::Lost;
            alloc::format!("😞 Game Over! The word was: {}", self.secret_word)
        } else {
            "❌ Wrong guess! Try again. (-10 points)".to_string()
        };
        Ok(GuessOutcome {
            correct: false,
            snapshot: self.snapshot(),
            message,
        })
    }

    /// Pay for the number of case-insensitive occurrences of `letter`.
    pub fn check_letter(&mut self, letter: char) -> Result<u32, GameError> {
        self.ensure_in_progress()?;
        if !letter.is_alphabetic() {
            return Err(GameError::InvalidInput(
                "Please enter a valid letter (A-Z)".to_string(),
            ));
        }
        let score = scoring::guarded_deduct(self.score, LETTER_CHECK_COST, true)?;
        let wanted: String = letter.to_uppercase().collect();
        let count = self
            .secret_word
            .chars()
            .filter(|c| c.to_uppercase().eq(wanted.chars()))
            .count() as u32;
        self.score = score;
        self.letter_checks_used += 1;
        Ok(count)
    }

    /// Pay once to learn the secret word's length.
    pub fn reveal_word_length(&mut self) -> Result<usize, GameError> {
        self.ensure_in_progress()?;
        let score =
            scoring::guarded_deduct(self.score, WORD_LENGTH_COST, !self.word_length_revealed)?;
        self.score = score;
        self.word_length_revealed = true;
        Ok(self.secret_word.chars().count())
    }

    /// Check the hint guard and return the word a hint should describe.
    ///
    /// Nothing changes until [`GameSession::consume_hint`] is called.
    pub fn hint_target(&self) -> Result<String, GameError> {
        self.ensure_in_progress()?;
        if !scoring::hint_unlocked(self.attempts_remaining, self.hints_used) {
            return Err(GameError::HintUnavailable);
        }
        Ok(self.secret_word.clone())
    }

    /// Mark the session's single hint as used.
    pub fn consume_hint(&mut self) -> Result<(), GameError> {
        self.hint_target()?;
        self.hints_used += 1;
        Ok(())
    }
}
