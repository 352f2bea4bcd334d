//! A single game of Mastermind
//!
//! The session owns the secret and the turn counter. Scoring and turn
//! accounting are separate operations: callers validate and consume a turn
//! with [`GameSession::play_guess`], then score with
//! [`GameSession::evaluate_guess`].

use super::{GameError, MAX_TURNS, evaluate, generate_code_with};
use crate::core::{Code, Score};
use rand::Rng;
use tracing::{debug, warn};

/// State of one game: the hidden code and how many turns have been played
#[derive(Debug, Clone)]
pub struct GameSession {
    secret_code: Code,
    max_turns: u64,
    played_turns: u64,
}

impl GameSession {
    /// Start a session with a secret from the thread-local generator
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Start a session with a secret drawn from `rng`
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::GameSession;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let a = GameSession::with_rng(&mut StdRng::seed_from_u64(1));
    /// let b = GameSession::with_rng(&mut StdRng::seed_from_u64(1));
    /// assert_eq!(a.secret_code(), b.secret_code());
    /// ```
    #[must_use]
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let session = Self::with_secret(generate_code_with(rng));
        debug!(max_turns = session.max_turns, "generated secret code");
        session
    }

    /// Start a session with a known secret
    #[must_use]
    pub const fn with_secret(secret_code: Code) -> Self {
        Self {
            secret_code,
            max_turns: MAX_TURNS,
            played_turns: 0,
        }
    }

    /// The hidden code
    #[inline]
    #[must_use]
    pub const fn secret_code(&self) -> &Code {
        &self.secret_code
    }

    /// Turns consumed so far, including any that overflowed the budget
    #[inline]
    #[must_use]
    pub const fn played_turns(&self) -> u64 {
        self.played_turns
    }

    /// Turn budget for this session
    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> u64 {
        self.max_turns
    }

    /// Turns left before the next valid guess fails
    #[inline]
    #[must_use]
    pub const fn turns_remaining(&self) -> u64 {
        self.max_turns.saturating_sub(self.played_turns)
    }

    /// Check if the turn budget is spent
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.played_turns >= self.max_turns
    }

    /// Score a guess against the secret without consuming a turn
    ///
    /// See [`evaluate`] for the matching rules.
    #[must_use]
    pub fn evaluate_guess(&self, guess: &Code) -> Score {
        evaluate(&self.secret_code, guess)
    }

    /// Consume a turn for a guess
    ///
    /// A malformed guess is rejected without touching the counter. A valid
    /// guess is always counted, even when it is the one that exceeds the
    /// budget, so the counter keeps climbing on every later valid call.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidGuess`] if the guess is not exactly four
    /// known color symbols, and [`GameError::OutOfTurns`] if the counted turn
    /// goes past the maximum.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameError, GameSession};
    ///
    /// let mut session = GameSession::new();
    /// session.play_guess(&['R', 'G', 'B', 'Y']).unwrap();
    /// assert_eq!(session.played_turns(), 1);
    ///
    /// let err = session.play_guess(&['R', 'G']).unwrap_err();
    /// assert!(matches!(err, GameError::InvalidGuess(_)));
    /// assert_eq!(session.played_turns(), 1);
    /// ```
    pub fn play_guess(&mut self, guess: &[char]) -> Result<(), GameError> {
        if let Err(err) = Code::try_from(guess) {
            warn!(%err, "rejected guess");
            return Err(err.into());
        }

        self.played_turns += 1;

        if self.played_turns > self.max_turns {
            warn!(
                played = self.played_turns,
                max = self.max_turns,
                "turn budget exceeded"
            );
            return Err(GameError::OutOfTurns {
                played: self.played_turns,
                max: self.max_turns,
            });
        }

        debug!(
            played = self.played_turns,
            remaining = self.turns_remaining(),
            "turn played"
        );
        Ok(())
    }

    /// Replace the secret for deterministic scoring checks
    #[cfg(test)]
    pub(crate) fn set_secret_code(&mut self, secret_code: Code) {
        self.secret_code = secret_code;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CODE_LENGTH, Color, GuessError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VALID: [char; 4] = ['R', 'G', 'B', 'Y'];

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn new_session_starts_fresh() {
        let session = GameSession::new();
        assert_eq!(session.played_turns(), 0);
        assert_eq!(session.max_turns(), MAX_TURNS);
        assert_eq!(session.turns_remaining(), MAX_TURNS);
        assert!(!session.is_exhausted());
        assert_eq!(session.secret_code().colors().len(), CODE_LENGTH);
    }

    #[test]
    fn seeded_sessions_share_secret() {
        let a = GameSession::with_rng(&mut StdRng::seed_from_u64(5));
        let b = GameSession::with_rng(&mut StdRng::seed_from_u64(5));
        assert_eq!(a.secret_code(), b.secret_code());
    }

    #[test]
    fn evaluate_uses_overridden_secret() {
        let mut session = GameSession::new();
        session.set_secret_code(code("RGBY"));

        assert_eq!(session.evaluate_guess(&code("RGBY")), Score::PERFECT);
        assert_eq!(session.evaluate_guess(&code("WWGR")), Score::new(0, 2));

        session.set_secret_code(code("RBBY"));
        assert_eq!(session.evaluate_guess(&code("BWGB")), Score::new(0, 2));
        assert_eq!(session.evaluate_guess(&code("RWGB")), Score::new(1, 1));
    }

    #[test]
    fn evaluate_is_pure() {
        let session = GameSession::with_secret(code("RBBY"));
        let guess = code("RWGB");

        let first = session.evaluate_guess(&guess);
        let second = session.evaluate_guess(&guess);

        assert_eq!(first, second);
        assert_eq!(session.played_turns(), 0);
        assert_eq!(session.secret_code(), &code("RBBY"));
    }

    #[test]
    fn valid_guess_consumes_turn() {
        let mut session = GameSession::new();
        assert_eq!(session.play_guess(&VALID), Ok(()));
        assert_eq!(session.played_turns(), 1);
        assert_eq!(session.turns_remaining(), MAX_TURNS - 1);
    }

    #[test]
    fn wrong_length_guess_rejected_without_turn() {
        let mut session = GameSession::new();

        assert_eq!(
            session.play_guess(&['R', 'G', 'B']),
            Err(GameError::InvalidGuess(GuessError::InvalidLength(3)))
        );
        assert_eq!(
            session.play_guess(&['R', 'G', 'B', 'Y', 'G']),
            Err(GameError::InvalidGuess(GuessError::InvalidLength(5)))
        );
        assert_eq!(session.played_turns(), 0);
    }

    #[test]
    fn unknown_color_guess_rejected_without_turn() {
        let mut session = GameSession::new();

        assert_eq!(
            session.play_guess(&['R', 'G', 'B', 'X']),
            Err(GameError::InvalidGuess(GuessError::InvalidColor('X')))
        );
        assert_eq!(session.played_turns(), 0);
    }

    #[test]
    fn lowercase_guess_rejected_without_turn() {
        let mut session = GameSession::new();

        assert_eq!(
            session.play_guess(&['r', 'g', 'b', 'y']),
            Err(GameError::InvalidGuess(GuessError::InvalidColor('r')))
        );
        assert_eq!(session.played_turns(), 0);
    }

    #[test]
    fn counter_climbs_past_u32_range() {
        let mut session = GameSession::new();
        session.played_turns = u64::from(u32::MAX);

        assert_eq!(
            session.play_guess(&VALID),
            Err(GameError::OutOfTurns {
                played: u64::from(u32::MAX) + 1,
                max: MAX_TURNS
            })
        );
        assert_eq!(session.played_turns(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn budget_allows_exactly_max_turns() {
        let mut session = GameSession::new();

        for turn in 1..=MAX_TURNS {
            assert_eq!(session.play_guess(&VALID), Ok(()));
            assert_eq!(session.played_turns(), turn);
        }
        assert!(session.is_exhausted());
        assert_eq!(session.turns_remaining(), 0);

        assert_eq!(
            session.play_guess(&VALID),
            Err(GameError::OutOfTurns {
                played: MAX_TURNS + 1,
                max: MAX_TURNS
            })
        );
        assert_eq!(session.played_turns(), MAX_TURNS + 1);
    }

    #[test]
    fn counter_keeps_climbing_after_exhaustion() {
        let mut session = GameSession::new();
        for _ in 0..MAX_TURNS {
            session.play_guess(&VALID).unwrap();
        }

        for extra in 1..=3 {
            let err = session.play_guess(&VALID).unwrap_err();
            assert_eq!(
                err,
                GameError::OutOfTurns {
                    played: MAX_TURNS + extra,
                    max: MAX_TURNS
                }
            );
        }
        assert_eq!(session.played_turns(), MAX_TURNS + 3);
        assert_eq!(session.turns_remaining(), 0);
    }

    #[test]
    fn invalid_guess_after_exhaustion_is_still_invalid() {
        let mut session = GameSession::new();
        for _ in 0..MAX_TURNS {
            session.play_guess(&VALID).unwrap();
        }

        assert!(matches!(
            session.play_guess(&['X']),
            Err(GameError::InvalidGuess(_))
        ));
        assert_eq!(session.played_turns(), MAX_TURNS);
    }

    #[test]
    fn playing_does_not_change_secret() {
        let secret = Code::new([Color::Orange; CODE_LENGTH]);
        let mut session = GameSession::with_secret(secret);

        session.play_guess(&VALID).unwrap();
        assert_eq!(session.secret_code(), &secret);
    }

    #[test]
    fn error_messages() {
        let invalid = GameError::from(GuessError::InvalidColor('X'));
        assert_eq!(
            invalid.to_string(),
            "Invalid guess: Guess contains unknown color 'X'"
        );

        let out = GameError::OutOfTurns { played: 11, max: 10 };
        assert_eq!(out.to_string(), "Out of turns: played 11 of 10");
    }
}
