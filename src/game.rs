//! Game service driving one [`GameSession`] at a time.
//!
//! `WordGame` pairs the session state machine with its collaborators (word
//! source, hint cascade, timer) and broadcasts what happens. Every operation
//! takes `&mut self`, so callers that share a game queue behind a lock and
//! never see two operations interleave. Snapshots go out on a watch channel
//! after each operation; terminal transitions go out once each on a broadcast
//! channel.

#![cfg(feature = "std")]

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::{broadcast, watch};

use crate::core::{
    validate_level, GameError, GameSession, GameStatus, GuessOutcome, SessionSnapshot,
};
use crate::hint::HintCascade;
use crate::timer::GameTimer;
use crate::word_source::SecretWordSource;

const EVENT_CAPACITY: usize = 16;

/// Terminal transitions of a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameEvent {
    Won {
        final_score: u32,
        /// Whole seconds from start to the winning guess.
        completion_time: u64,
        level: u32,
    },
    Lost {
        secret_word: String,
    },
    Error {
        reason: String,
    },
}

fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

pub struct WordGame {
    session: GameSession,
    words: Box<dyn SecretWordSource>,
    hints: HintCascade,
    timer: GameTimer,
    rng: SmallRng,
    snapshots: watch::Sender<SessionSnapshot>,
    events: broadcast::Sender<GameEvent>,
}

impl WordGame {
    /// A game in the pre-start configuration.
    pub fn new(words: Box<dyn SecretWordSource>, hints: HintCascade, rng: SmallRng) -> Self {
        let session = GameSession::default();
        let (snapshots, _) = watch::channel(session.snapshot());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            session,
            words,
            hints,
            timer: GameTimer::new(),
            rng,
            snapshots,
            events,
        }
    }

    /// Local hints only, seeded for reproducible play.
    pub fn seeded(words: Box<dyn SecretWordSource>, seed: u64) -> Self {
        Self::new(words, HintCascade::default(), SmallRng::seed_from_u64(seed))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.session.snapshot());
    }

    fn emit(&self, event: GameEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Replace the current session with a new one at `level`.
    ///
    /// Observers see `Loading` while the word is fetched. A failure leaves the
    /// session in `Error` and emits [`GameEvent::Error`].
    pub async fn start(&mut self, level: u32) -> Result<SessionSnapshot, GameError> {
        self.timer.reset();
        self.session = GameSession::loading(level);
        self.publish();

        let result = match validate_level(level) {
            Ok(level) => match self.words.fetch_word_for_level(level).await {
                Ok(word) => GameSession::begin(&word, level, now_millis()),
                Err(e) => Err(GameError::NetworkError(e.to_string())),
            },
            Err(e) => Err(e),
        };

        match result {
            Ok(session) => {
                log::info!("started level {} game", level);
                self.session = session;
                self.timer.start();
                self.publish();
                Ok(self.session.snapshot())
            }
            Err(e) => {
                log::warn!("could not start level {} game: {}", level, e);
                self.session = GameSession::failed(level);
                self.publish();
                self.emit(GameEvent::Error {
                    reason: e.user_message(),
                });
                Err(e)
            }
        }
    }

    pub async fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let outcome = self.session.submit_guess(guess)?;
        self.publish();
        match outcome.snapshot.status {
            GameStatus::Won => {
                let completion_time = self.timer.stop();
                log::info!(
                    "won level {} with {} points in {}s",
                    outcome.snapshot.level,
                    outcome.snapshot.score,
                    completion_time
                );
                self.emit(GameEvent::Won {
                    final_score: outcome.snapshot.score,
                    completion_time,
                    level: outcome.snapshot.level,
                });
            }
            GameStatus::Lost => {
                self.timer.stop();
                log::info!("lost level {}", outcome.snapshot.level);
                self.emit(GameEvent::Lost {
                    secret_word: outcome.snapshot.secret_word.clone(),
                });
            }
            _ => {}
        }
        Ok(outcome)
    }

    pub fn check_letter(&mut self, letter: char) -> Result<u32, GameError> {
        let count = self.session.check_letter(letter).inspect_err(|e| {
            log::debug!("letter check rejected: {}", e);
        })?;
        self.publish();
        Ok(count)
    }

    pub fn word_length(&mut self) -> Result<usize, GameError> {
        let len = self.session.reveal_word_length().inspect_err(|e| {
            log::debug!("word length rejected: {}", e);
        })?;
        self.publish();
        Ok(len)
    }

    /// Consume the session's hint. Once the guard passes a hint is always
    /// produced, falling back to a local one when collaborators fail.
    pub async fn hint(&mut self) -> Result<String, GameError> {
        let word = self.session.hint_target()?;
        let hint = self.hints.generate(&mut self.rng, &word).await;
        self.session.consume_hint()?;
        self.publish();
        Ok(hint)
    }

    /// Back to the pre-start configuration without fetching a word.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.session.reset();
        self.publish();
    }
}
