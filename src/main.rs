//! Mastermind - CLI
//!
//! Tools around the Mastermind rules: generate secret codes, score guesses,
//! validate guesses and sample the code generator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{
        GenerateConfig, SampleConfig, generate_codes, run_sample, score_guess, validate_guess,
    },
    output::{print_generated, print_sample_result, print_score_result, print_validation_result},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code generation and guess scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate secret codes
    Generate {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Score a guess against a secret, e.g. `score RBBY RWGB`
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Check whether a guess is a valid code
    Validate {
        /// The guess to check
        guess: String,
    },

    /// Sample the code generator and report color distribution
    Sample {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate { count, seed } => {
            run_generate_command(count, seed);
            Ok(())
        }
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Validate { guess } => {
            run_validate_command(&guess);
            Ok(())
        }
        Commands::Sample { count, seed } => {
            run_sample_command(count, seed);
            Ok(())
        }
    }
}

fn run_generate_command(count: usize, seed: Option<u64>) {
    let mut config = GenerateConfig::new(count);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let codes = generate_codes(config);
    print_generated(&codes);
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_score_result(&result);
    Ok(())
}

fn run_validate_command(guess: &str) {
    let result = validate_guess(guess);
    print_validation_result(&result);

    if !result.valid {
        std::process::exit(1);
    }
}

fn run_sample_command(count: usize, seed: Option<u64>) {
    println!("Sampling {count} codes...");

    let mut config = SampleConfig::new(count).with_progress(true);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let result = run_sample(config);
    print_sample_result(&result);
}
