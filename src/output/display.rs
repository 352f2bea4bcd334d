//! Display functions for command results

use super::formatters::{code_to_swatches, color_swatch, share_bar};
use crate::commands::sample::{EXPECTED_COLOR_SHARE, EXPECTED_REPEAT_SHARE};
use crate::commands::{SampleResult, ScoreResult, ValidationResult};
use crate::core::{CODE_LENGTH, Code, Color};
use colored::Colorize;

/// Print generated codes, one per line
pub fn print_generated(codes: &[Code]) {
    for (i, code) in codes.iter().enumerate() {
        println!(
            "{:>4}. {}  {}",
            (i + 1).to_string().bright_black(),
            code_to_swatches(code),
            code.to_string().bright_black()
        );
    }
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret: {}", code_to_swatches(&result.secret));
    println!("Guess:  {}", code_to_swatches(&result.guess));
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\nPegs:   {}  {}",
        result.score.to_pegs().bright_white().bold(),
        result.score.to_string().bright_black()
    );
    println!(
        "  Perfect matches: {}",
        result.score.perfect_matches().to_string().green()
    );
    println!(
        "  Color matches:   {}",
        result.score.color_matches().to_string().yellow()
    );

    println!();
    if result.solved() {
        println!("{}", "✅ Code cracked!".green().bold());
    } else {
        println!("{}", "❌ Not solved yet".red().bold());
    }
}

/// Print the result of validating a guess
pub fn print_validation_result(result: &ValidationResult) {
    match result.reason {
        None => println!(
            "{} {}",
            "✓".green().bold(),
            format!("'{}' is a valid guess", result.input).green()
        ),
        Some(reason) => println!(
            "{} {}",
            "✗".red().bold(),
            format!("'{}' is not a valid guess: {reason}", result.input).red()
        ),
    }
}

/// Print color tallies from a sampling run
pub fn print_sample_result(result: &SampleResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CODE GENERATION SAMPLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Codes generated:  {}", result.count);
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n🎨 {}", "Color shares:".bright_cyan().bold());
    for color in Color::ALL {
        let share = result.color_share(color);
        // A uniform share fills half the bar
        println!(
            "   {} {:<7} {} {:5.2}%",
            color_swatch(color),
            color.name(),
            share_bar(share * 3.0, 30).green(),
            share * 100.0
        );
    }
    println!(
        "   Expected {:.2}% each, max deviation {}",
        EXPECTED_COLOR_SHARE * 100.0,
        format!("{:.3}%", result.max_color_deviation() * 100.0).bright_yellow()
    );

    println!("\n📍 {}", "Per position:".bright_cyan().bold());
    let header: String = Color::ALL
        .iter()
        .map(|&c| format!("{:>7}", color_swatch(c)))
        .collect();
    println!("   pos {header}");
    for position in 0..CODE_LENGTH {
        let row: String = Color::ALL
            .iter()
            .map(|&c| format!("{:>6.2}%", result.position_share(position, c) * 100.0))
            .collect();
        println!("   {position:>3} {row}");
    }

    println!("\n🔁 {}", "Repeats:".bright_cyan().bold());
    println!(
        "   Codes with a repeated color: {} (expected {:.2}%)",
        format!("{:.2}%", result.repeat_share() * 100.0)
            .bright_yellow()
            .bold(),
        EXPECTED_REPEAT_SHARE * 100.0
    );
}
