//! Mastermind
//!
//! Game logic for the Mastermind code-breaking game: a hidden four-peg color
//! code, guess validation, guess scoring and a ten-turn budget.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Code;
//! use mastermind::game::GameSession;
//!
//! let mut session = GameSession::new();
//!
//! // Consume a turn, then score the guess
//! session.play_guess(&['R', 'G', 'B', 'Y']).unwrap();
//! let guess: Code = "RGBY".parse().unwrap();
//! let score = session.evaluate_guess(&guess);
//!
//! println!("{} perfect, {} color", score.perfect_matches(), score.color_matches());
//! ```

// Core domain types
pub mod core;

// Rules and sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
