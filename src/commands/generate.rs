//! Generate command
//!
//! Produces fresh secret codes, optionally from a fixed seed.

use crate::core::Code;
use crate::game::generate_code_with;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings for the generate command
#[derive(Debug, Clone, Copy)]
pub struct GenerateConfig {
    pub count: usize,
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generate `config.count` codes
///
/// With a seed the output is reproducible; without one the thread-local
/// generator is used.
#[must_use]
pub fn generate_codes(config: GenerateConfig) -> Vec<Code> {
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..config.count)
                .map(|_| generate_code_with(&mut rng))
                .collect()
        }
        None => {
            let mut rng = rand::rng();
            (0..config.count)
                .map(|_| generate_code_with(&mut rng))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        assert_eq!(generate_codes(GenerateConfig::new(0)).len(), 0);
        assert_eq!(generate_codes(GenerateConfig::new(7)).len(), 7);
    }

    #[test]
    fn seeded_runs_repeat() {
        let config = GenerateConfig::new(5).with_seed(2024);
        assert_eq!(generate_codes(config), generate_codes(config));
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate_codes(GenerateConfig::new(20).with_seed(1));
        let b = generate_codes(GenerateConfig::new(20).with_seed(2));
        assert_ne!(a, b);
    }
}
