//! Command implementations

pub mod generate;
pub mod sample;
pub mod score;
pub mod validate;

pub use generate::{GenerateConfig, generate_codes};
pub use sample::{SampleConfig, SampleResult, run_sample};
pub use score::{ScoreResult, score_guess};
pub use validate::{ValidationResult, validate_guess};
