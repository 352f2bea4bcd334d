//! Score command
//!
//! Scores one guess against an explicit secret.

use crate::core::{Code, GuessError, Score};
use crate::game::GameSession;

/// Result of scoring a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
}

impl ScoreResult {
    /// Check if the guess cracked the secret
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.score.is_perfect()
    }
}

/// Parse both codes and score the guess
///
/// # Errors
///
/// Returns a [`GuessError`] if either the secret or the guess is not a valid code.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, GuessError> {
    let secret: Code = secret.parse()?;
    let guess: Code = guess.parse()?;

    let session = GameSession::with_secret(secret);
    let score = session.evaluate_guess(&guess);

    Ok(ScoreResult {
        secret,
        guess,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_parsed_codes() {
        let result = score_guess("RBBY", "RWGB").unwrap();
        assert_eq!(result.score, Score::new(1, 1));
        assert!(!result.solved());
    }

    #[test]
    fn perfect_guess_is_solved() {
        let result = score_guess("rgby", "R G B Y").unwrap();
        assert!(result.solved());
    }

    #[test]
    fn rejects_bad_secret() {
        assert_eq!(
            score_guess("RGB", "RGBY"),
            Err(GuessError::InvalidLength(3))
        );
    }

    #[test]
    fn rejects_bad_guess() {
        assert_eq!(
            score_guess("RGBY", "RGBX"),
            Err(GuessError::InvalidColor('X'))
        );
    }
}
