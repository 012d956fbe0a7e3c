//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Code, Color, Feedback, FeedbackMarker};
use colored::{ColoredString, Colorize};

/// Filled peg glyph
pub const PEG: &str = "●";
/// Empty slot glyph
pub const HOLE: &str = "○";

/// Paint `text` in the terminal color matching `color`
#[must_use]
pub fn paint(color: Color, text: &str) -> ColoredString {
    match color {
        Color::Red => text.red(),
        Color::Yellow => text.yellow(),
        Color::Green => text.green(),
        Color::Blue => text.blue(),
        Color::Orange => text.truecolor(255, 165, 0),
        Color::Purple => text.magenta(),
        Color::Cyan => text.cyan(),
        Color::Pink => text.truecolor(255, 105, 180),
    }
}

/// A code as colored pegs, empty slots as holes
#[must_use]
pub fn code_pegs(code: &Code) -> String {
    code.slots()
        .iter()
        .map(|slot| match slot {
            Some(color) => paint(*color, PEG).to_string(),
            None => HOLE.bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback as a fixed-width marker string
///
/// `●` exact, `○` partial, `·` for the unused positions. Rows that have not
/// been verified are blank.
#[must_use]
pub fn feedback_pegs(feedback: Option<Feedback>) -> String {
    let Some(feedback) = feedback else {
        return " ".repeat(CODE_LENGTH);
    };
    let mut result: String = feedback
        .markers()
        .map(|m| match m {
            FeedbackMarker::ExactMatch => '●',
            FeedbackMarker::PartialMatch => '○',
        })
        .collect();
    for _ in feedback.len()..CODE_LENGTH {
        result.push('·');
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_unverified_is_blank() {
        assert_eq!(feedback_pegs(None), "    ");
    }

    #[test]
    fn feedback_pegs_pads_to_code_length() {
        assert_eq!(feedback_pegs(Some(Feedback::new(1, 2))), "●○○·");
        assert_eq!(feedback_pegs(Some(Feedback::NONE)), "····");
        assert_eq!(feedback_pegs(Some(Feedback::PERFECT)), "●●●●");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
