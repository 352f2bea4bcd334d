//! Peg colors
//!
//! The six colors a code may be built from, each with a single-letter symbol
//! used when codes travel as text.

use std::fmt;

/// One of the six Mastermind peg colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Orange,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::White,
        Self::Orange,
    ];

    /// Number of distinct colors
    pub const COUNT: usize = Self::ALL.len();

    /// Single-letter symbol for this color
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::White => 'W',
            Self::Orange => 'O',
        }
    }

    /// Look up a color by its exact symbol
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_symbol('R'), Some(Color::Red));
    /// assert_eq!(Color::from_symbol('r'), None);
    /// assert_eq!(Color::from_symbol('X'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'W' => Some(Self::White),
            'O' => Some(Self::Orange),
            _ => None,
        }
    }

    /// Position of this color in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Orange => "orange",
        }
    }
}

impl TryFrom<char> for Color {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(symbol)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
