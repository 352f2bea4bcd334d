//! Core domain types for Mastermind
//!
//! Pure value types: colors, codes and scores. Nothing here touches randomness
//! or session state.

mod code;
mod color;
mod score;

pub use code::{CODE_LENGTH, Code, GuessError};
pub use color::Color;
pub use score::Score;
