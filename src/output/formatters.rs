//! Formatting utilities for terminal output

use crate::core::{Code, Color};
use colored::{ColoredString, Colorize};

/// Color a peg symbol with its own terminal color
#[must_use]
pub fn color_swatch(color: Color) -> ColoredString {
    let symbol = color.symbol().to_string();
    let swatch = match color {
        Color::Red => symbol.red(),
        Color::Green => symbol.green(),
        Color::Blue => symbol.blue(),
        Color::Yellow => symbol.yellow(),
        Color::White => symbol.white(),
        Color::Orange => symbol.truecolor(255, 165, 0),
    };
    swatch.bold()
}

/// Format a code as space-separated colored symbols
#[must_use]
pub fn code_to_swatches(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&color| color_swatch(color).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a share in [0, 1] as a bar
#[must_use]
pub fn share_bar(share: f64, width: usize) -> String {
    create_progress_bar(share, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatches_keep_symbols() {
        colored::control::set_override(false);
        let code: Code = "RGBO".parse().unwrap();
        assert_eq!(code_to_swatches(&code), "R G B O");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        let bar = create_progress_bar(150.0, 100.0, 4);
        assert_eq!(bar, "████");
    }

    #[test]
    fn share_bar_half() {
        assert_eq!(share_bar(0.5, 10), "█████░░░░░");
    }
}
