//! Score command
//!
//! Evaluates a single guess against a given secret.

use crate::core::{Code, CodeError, Feedback};

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code is not exactly four known color letters.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, CodeError> {
    let secret: Code = secret.parse()?;
    let guess: Code = guess.parse()?;
    let feedback = Feedback::evaluate(&secret, &guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_swapped_colors() {
        let result = score_codes("RYGB", "YRGP").unwrap();
        assert_eq!(result.feedback, Feedback::new(1, 2));
        assert_eq!(result.secret.to_string(), "RYGB");
        assert_eq!(result.guess.to_string(), "YRGP");
    }

    #[test]
    fn score_repeated_colors() {
        let result = score_codes("RRGB", "RRRR").unwrap();
        assert_eq!(result.feedback, Feedback::new(2, 0));
    }

    #[test]
    fn score_lowercase_input() {
        let result = score_codes("rygb", "rygb").unwrap();
        assert!(result.feedback.is_perfect());
    }

    #[test]
    fn score_rejects_bad_codes() {
        assert_eq!(
            score_codes("RYG", "RYGB").err(),
            Some(CodeError::InvalidLength(3))
        );
        assert_eq!(
            score_codes("RYGB", "RYGZ").err(),
            Some(CodeError::UnknownColor('Z'))
        );
    }
}
