//! Validate command

use crate::core::{Code, GuessError};

/// Outcome of validating a textual guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub input: String,
    pub valid: bool,
    /// Why the guess was rejected, when it was
    pub reason: Option<GuessError>,
}

/// Check a guess given as text
///
/// Whitespace and commas between symbols are ignored and letters are
/// uppercased, matching how codes are parsed from text elsewhere.
#[must_use]
pub fn validate_guess(input: &str) -> ValidationResult {
    let symbols: Vec<char> = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let reason = Code::try_from(symbols.as_slice()).err();

    ValidationResult {
        input: input.to_string(),
        valid: reason.is_none(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_guess() {
        let result = validate_guess("RGBY");
        assert!(result.valid);
        assert_eq!(result.reason, None);
    }

    #[test]
    fn accepts_lowercase_text() {
        let result = validate_guess("r g b y");
        assert!(result.valid);
        assert_eq!(result.input, "r g b y");
    }

    #[test]
    fn reports_length() {
        let result = validate_guess("RGBYG");
        assert!(!result.valid);
        assert_eq!(result.reason, Some(GuessError::InvalidLength(5)));
    }

    #[test]
    fn reports_color() {
        let result = validate_guess("R,G,B,X");
        assert!(!result.valid);
        assert_eq!(result.reason, Some(GuessError::InvalidColor('X')));
    }
}
