//! Guess feedback
//!
//! A score counts perfect matches (right color, right position) and color
//! matches (color present in the secret, wrong position).

use super::CODE_LENGTH;
use std::fmt;

/// Feedback for one guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    perfect_matches: u8,
    color_matches: u8,
}

impl Score {
    /// Every position correct
    pub const PERFECT: Self = Self::new(CODE_LENGTH as u8, 0);

    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(perfect_matches: u8, color_matches: u8) -> Self {
        Self {
            perfect_matches,
            color_matches,
        }
    }

    /// Positions where guess and secret agree
    #[inline]
    #[must_use]
    pub const fn perfect_matches(self) -> u8 {
        self.perfect_matches
    }

    /// Positions whose color occurs elsewhere in the secret
    #[inline]
    #[must_use]
    pub const fn color_matches(self) -> u8 {
        self.color_matches
    }

    /// Check if the guess cracked the code
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.perfect_matches as usize == CODE_LENGTH
    }

    /// Render as key pegs: `●` per perfect match, `○` per color match, `·` for the rest
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Score;
    ///
    /// assert_eq!(Score::new(1, 2).to_pegs(), "●○○·");
    /// ```
    #[must_use]
    pub fn to_pegs(self) -> String {
        let perfect = usize::from(self.perfect_matches);
        let color = usize::from(self.color_matches);
        let empty = CODE_LENGTH.saturating_sub(perfect + color);

        let mut pegs = String::with_capacity(CODE_LENGTH * 3);
        pegs.push_str(&"●".repeat(perfect));
        pegs.push_str(&"○".repeat(color));
        pegs.push_str(&"·".repeat(empty));
        pegs
    }
}

impl From<Score> for (u8, u8) {
    fn from(score: Score) -> Self {
        (score.perfect_matches, score.color_matches)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.perfect_matches, self.color_matches)
    }
}
