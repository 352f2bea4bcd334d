//! Sample command
//!
//! Generates a large batch of codes in parallel and tallies how the colors
//! are distributed, to check the shape of secret generation.

use crate::core::{CODE_LENGTH, Code, Color};
use crate::game::generate_code_with;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Codes generated per parallel work item
const CHUNK_SIZE: usize = 4096;

/// Share of uniformly drawn codes expected to repeat at least one color
///
/// 1 - (6 × 5 × 4 × 3) / 6⁴
pub const EXPECTED_REPEAT_SHARE: f64 = 1.0 - 360.0 / 1296.0;

/// Expected share of every color at every position
pub const EXPECTED_COLOR_SHARE: f64 = 1.0 / Color::COUNT as f64;

/// Settings for a sampling run
#[derive(Debug, Clone, Copy)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SampleConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Color tallies from one sampling run
#[derive(Debug, Clone)]
pub struct SampleResult {
    pub count: usize,
    /// Seed the run used; pass it back in to reproduce the run
    pub seed: u64,
    pub color_counts: FxHashMap<Color, usize>,
    pub position_counts: [FxHashMap<Color, usize>; CODE_LENGTH],
    pub codes_with_repeats: usize,
    pub duration: Duration,
}

impl SampleResult {
    /// Share of all generated pegs that had this color
    #[must_use]
    pub fn color_share(&self, color: Color) -> f64 {
        let pegs = self.count * CODE_LENGTH;
        if pegs == 0 {
            return 0.0;
        }
        self.color_counts.get(&color).copied().unwrap_or(0) as f64 / pegs as f64
    }

    /// Share of codes at `position` that had this color
    #[must_use]
    pub fn position_share(&self, position: usize, color: Color) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.position_counts[position]
            .get(&color)
            .copied()
            .unwrap_or(0) as f64
            / self.count as f64
    }

    /// Share of codes containing a repeated color
    #[must_use]
    pub fn repeat_share(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.codes_with_repeats as f64 / self.count as f64
    }

    /// Largest gap between any color's overall share and the uniform share
    #[must_use]
    pub fn max_color_deviation(&self) -> f64 {
        Color::ALL
            .iter()
            .map(|&color| (self.color_share(color) - EXPECTED_COLOR_SHARE).abs())
            .fold(0.0, f64::max)
    }
}

#[derive(Default)]
struct Tally {
    color_counts: FxHashMap<Color, usize>,
    position_counts: [FxHashMap<Color, usize>; CODE_LENGTH],
    codes_with_repeats: usize,
}

impl Tally {
    fn record(&mut self, code: &Code) {
        for (position, &color) in code.colors().iter().enumerate() {
            *self.color_counts.entry(color).or_insert(0) += 1;
            *self.position_counts[position].entry(color).or_insert(0) += 1;
        }
        if code.has_repeats() {
            self.codes_with_repeats += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        for (color, count) in other.color_counts {
            *self.color_counts.entry(color).or_insert(0) += count;
        }
        for (mine, theirs) in self.position_counts.iter_mut().zip(other.position_counts) {
            for (color, count) in theirs {
                *mine.entry(color).or_insert(0) += count;
            }
        }
        self.codes_with_repeats += other.codes_with_repeats;
        self
    }
}

/// Generate `config.count` codes and tally their colors
///
/// Work is split into fixed-size chunks, each with its own generator seeded
/// from the run seed and the chunk index, so a seeded run gives the same
/// tallies regardless of thread scheduling.
#[must_use]
pub fn run_sample(config: SampleConfig) -> SampleResult {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let chunks = config.count.div_ceil(CHUNK_SIZE);

    let pb = if config.show_progress {
        progress_bar(config.count)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let tally = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chunk as u64));
            let len = CHUNK_SIZE.min(config.count - chunk * CHUNK_SIZE);

            let mut tally = Tally::default();
            for _ in 0..len {
                tally.record(&generate_code_with(&mut rng));
            }

            pb.inc(len as u64);
            tally
        })
        .reduce(Tally::default, Tally::merge);

    pb.finish_and_clear();

    SampleResult {
        count: config.count,
        seed,
        color_counts: tally.color_counts,
        position_counts: tally.position_counts,
        codes_with_repeats: tally.codes_with_repeats,
        duration: start.elapsed(),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
