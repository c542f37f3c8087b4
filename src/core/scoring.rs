//! Score arithmetic for wrong guesses and paid actions.
//!
//! All values are unsigned and clamp at zero, so no rule can drive a score or
//! an attempt counter negative.

use super::common::GameError;
use super::config::{GUESS_PENALTY, HINT_THRESHOLD, MAX_ATTEMPTS, MAX_HINTS};

/// Score and attempts after one wrong guess.
pub fn apply_wrong_guess(score: u32, attempts_remaining: u32) -> (u32, u32) {
    (
        score.saturating_sub(GUESS_PENALTY),
        attempts_remaining.saturating_sub(1),
    )
}

/// `true` once a wrong guess has exhausted either budget.
pub fn is_exhausted(score: u32, attempts_remaining: u32) -> bool {
    score == 0 || attempts_remaining == 0
}

/// Deduct `cost` from `score` when `allowed` holds and the score covers it.
///
/// Shared by every paid action: the precondition and the affordability check
/// fail the same way and leave the score untouched.
pub fn guarded_deduct(score: u32, cost: u32, allowed: bool) -> Result<u32, GameError> {
    if !allowed || score < cost {
        return Err(GameError::InsufficientPoints);
    }
    Ok(score - cost)
}

/// Wrong guesses made so far.
pub fn wrong_guesses(attempts_remaining: u32) -> u32 {
    MAX_ATTEMPTS.saturating_sub(attempts_remaining)
}

pub fn hint_unlocked(attempts_remaining: u32, hints_used: u32) -> bool {
    wrong_guesses(attempts_remaining) >= HINT_THRESHOLD && hints_used < MAX_HINTS
}
