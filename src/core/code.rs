//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of colors. It plays two roles: the hidden
//! secret of a session and the guess a player submits each turn.

use super::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of pegs in every code
pub const CODE_LENGTH: usize = 4;

/// An ordered sequence of [`CODE_LENGTH`] colors
///
/// Holding a `Code` means the sequence is already valid. Raw input is checked
/// on the way in through `TryFrom<&[char]>` or [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

/// Reasons raw input is not a valid code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be exactly {len} colors, got {0}", len = CODE_LENGTH)]
    InvalidLength(usize),
    #[error("Guess contains unknown color '{0}'")]
    InvalidColor(char),
}

impl Code {
    /// Build a code from colors
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Get the colors in order
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Get the color at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= `CODE_LENGTH`
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Check if the color appears anywhere in the code
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// Check if any color appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(i, color)| self.0[i + 1..].contains(color))
    }
}

impl TryFrom<&[char]> for Code {
    type Error = GuessError;

    fn try_from(symbols: &[char]) -> Result<Self, Self::Error> {
        if symbols.len() != CODE_LENGTH {
            return Err(GuessError::InvalidLength(symbols.len()));
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, &symbol) in colors.iter_mut().zip(symbols) {
            *slot = Color::try_from(symbol).map_err(GuessError::InvalidColor)?;
        }

        Ok(Self(colors))
    }
}

impl FromStr for Code {
    type Err = GuessError;

    /// Parse a code like "RGBY", "r g b y" or "R,G,B,Y"
    ///
    /// Text is uppercased before lookup, so lowercase symbols are accepted
    /// here but not through `TryFrom<&[char]>`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, GuessError};
    ///
    /// let code: Code = "RGBY".parse().unwrap();
    /// assert_eq!(code.color_at(3), Color::Yellow);
    ///
    /// assert_eq!("RGB".parse::<Code>(), Err(GuessError::InvalidLength(3)));
    /// assert_eq!("RGBX".parse::<Code>(), Err(GuessError::InvalidColor('X')));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::try_from(symbols.as_slice())
    }
}

impl From<[Color; CODE_LENGTH]> for Code {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
