use alloc::string::{String, ToString};

use super::common::GameError;
use super::config::{MAX_NAME_LEN, MIN_NAME_LEN};

/// Validate a player name, returning it trimmed.
pub fn validate_player_name(name: &str) -> Result<String, GameError> {
    let name = name.trim();
    let len = name.chars().count();
    let reason = if name.is_empty() {
        "Name cannot be empty"
    } else if len < MIN_NAME_LEN {
        "Name must be at least 2 characters"
    } else if len > MAX_NAME_LEN {
        "Name must not exceed 20 characters"
    } else if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        "Name can only contain letters and spaces"
    } else {
        return Ok(name.to_string());
    };
    Err(GameError::InvalidInput(reason.to_string()))
}

pub fn validate_level(level: u32) -> Result<u32, GameError> {
    if level == 0 {
        Err(GameError::InvalidInput("Level must be at least 1".to_string()))
    } else {
        Ok(level)
    }
}

/// Parse a single letter from user input.
pub fn parse_letter(input: &str) -> Result<char, GameError> {
    let input = input.trim();
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(GameError::InvalidInput("Please enter a letter".to_string())),
        (Some(_), Some(_)) => Err(GameError::InvalidInput(
            "Please enter only one letter".to_string(),
        )),
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        (Some(_), None) => Err(GameError::InvalidInput(
            "Please enter a valid letter (A-Z)".to_string(),
        )),
    }
}
