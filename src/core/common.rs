//! Common types for the word game: error kinds and session status.

use alloc::string::String;

/// Lifecycle of a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Waiting for a secret word.
    Loading,
    InProgress,
    Won,
    Lost,
    /// No secret word could be obtained.
    Error,
}

impl GameStatus {
    /// `true` for states that need a brand-new session to continue play.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost | GameStatus::Error)
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameError {
    /// Malformed guess, letter, level or name, with the reason.
    InvalidInput(String),
    /// A paid action was attempted below its cost, or was already used.
    InsufficientPoints,
    /// The hint is locked or already consumed.
    HintUnavailable,
    /// The session is not accepting actions.
    GameNotInProgress,
    /// An upstream collaborator failed or timed out.
    NetworkError(String),
    UnknownError(String),
}

impl GameError {
    /// Short message suitable for showing to the player.
    pub fn user_message(&self) -> String {
        use alloc::string::ToString;
        match self {
            GameError::InvalidInput(reason) => reason.clone(),
            GameError::InsufficientPoints => {
                "Not enough points or already revealed!".to_string()
            }
            GameError::HintUnavailable => "Hints available after 5 wrong attempts!".to_string(),
            GameError::GameNotInProgress => "Game is not in progress".to_string(),
            GameError::NetworkError(_) => {
                "Please check your internet connection and try again".to_string()
            }
            GameError::UnknownError(_) => "Something went wrong. Please try again".to_string(),
        }
    }

    /// Guard violations are expected and never corrupt the session.
    pub fn is_guard_violation(&self) -> bool {
        matches!(
            self,
            GameError::InvalidInput(_)
                | GameError::InsufficientPoints
                | GameError::HintUnavailable
                | GameError::GameNotInProgress
        )
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            GameError::InsufficientPoints => write!(f, "Not enough points for this action"),
            GameError::HintUnavailable => write!(f, "Hint is not available"),
            GameError::GameNotInProgress => write!(f, "Game is not in progress"),
            GameError::NetworkError(detail) => write!(f, "Network error: {}", detail),
            GameError::UnknownError(detail) => write!(f, "Unknown error: {}", detail),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
