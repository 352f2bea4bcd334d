//! Game logic
//!
//! Rules (generation, validation, scoring) and the turn-limited session that
//! ties them to one secret.

mod error;
mod rules;
mod session;

pub use error::GameError;
pub use rules::{MAX_TURNS, evaluate, generate_code, generate_code_with, is_valid_guess};
pub use session::GameSession;
