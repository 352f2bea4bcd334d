//! Session errors

use crate::core::GuessError;
use thiserror::Error;

/// Failures raised by [`GameSession::play_guess`](super::GameSession::play_guess)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess is not a well-formed code. No turn was consumed.
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] GuessError),

    /// The guess was well-formed but the turn budget is spent.
    #[error("Out of turns: played {played} of {max}")]
    OutOfTurns { played: u64, max: u64 },
}
