//! Game rules
//!
//! Code generation, guess validation and scoring. All of these are free
//! functions so they can be used without a session.

use crate::core::{CODE_LENGTH, Code, Color, Score};
use rand::Rng;

/// Turns a player gets before the session is exhausted
pub const MAX_TURNS: u64 = 10;

/// Generate a secret code from the thread-local generator
///
/// # Examples
/// ```
/// use mastermind::game::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.colors().len(), 4);
/// ```
#[must_use]
pub fn generate_code() -> Code {
    generate_code_with(&mut rand::rng())
}

/// Generate a secret code from the given generator
///
/// Each position is drawn independently and uniformly from [`Color::ALL`],
/// so colors may repeat.
#[must_use]
pub fn generate_code_with<R: Rng>(rng: &mut R) -> Code {
    let mut colors = [Color::Red; CODE_LENGTH];
    for slot in &mut colors {
        *slot = Color::ALL[rng.random_range(0..Color::COUNT)];
    }
    Code::new(colors)
}

/// Check that raw input is exactly [`CODE_LENGTH`] known color symbols
///
/// # Examples
/// ```
/// use mastermind::game::is_valid_guess;
///
/// assert!(is_valid_guess(&['R', 'G', 'B', 'Y']));
/// assert!(!is_valid_guess(&['R', 'G', 'B']));
/// assert!(!is_valid_guess(&['R', 'G', 'B', 'X']));
/// ```
#[must_use]
pub fn is_valid_guess(guess: &[char]) -> bool {
    Code::try_from(guess).is_ok()
}

/// Score `guess` against `secret`
///
/// A position counts as a perfect match when the colors agree. Otherwise it
/// counts as a color match when its color occurs anywhere in the secret.
/// Occurrences are never used up: a secret with one blue gives a color match
/// to every misplaced blue in the guess, and secret positions already matched
/// perfectly still count for other positions.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::game::evaluate;
///
/// let secret: Code = "RBBY".parse().unwrap();
/// let guess: Code = "BWGB".parse().unwrap();
/// let score = evaluate(&secret, &guess);
///
/// assert_eq!((score.perfect_matches(), score.color_matches()), (0, 2));
/// ```
#[must_use]
pub fn evaluate(secret: &Code, guess: &Code) -> Score {
    let mut perfect = 0;
    let mut color = 0;

    for (&guessed, &hidden) in guess.colors().iter().zip(secret.colors()) {
        if guessed == hidden {
            perfect += 1;
        } else if secret.contains(guessed) {
            color += 1;
        }
    }

    Score::new(perfect, color)
}
