//! Display functions for command results

use super::formatters::{code_pegs, create_progress_bar, feedback_pegs, paint};
use crate::commands::ScoreResult;
use crate::core::{Color, FeedbackMarker};
use crate::game::BoardView;
use colored::Colorize;

/// Print the palette with the key letter for each color
pub fn print_palette() {
    let entries: Vec<String> = Color::ALL
        .iter()
        .map(|&c| format!("{} {}", paint(c, "●"), c.letter().to_string().bold()))
        .collect();
    println!("  Colors: {}", entries.join("  "));
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("  Secret:   {}  {}", code_pegs(&result.secret), result.secret);
    println!("  Guess:    {}  {}", code_pegs(&result.guess), result.guess);
    println!("{}", "─".repeat(40).cyan());

    let feedback = result.feedback;
    println!(
        "  Markers:  {}",
        feedback_pegs(Some(feedback)).bright_white().bold()
    );
    println!(
        "  {} exact, {} partial",
        feedback.exact().to_string().green().bold(),
        feedback.partial().to_string().yellow().bold()
    );

    let order: Vec<&str> = feedback
        .markers()
        .map(|m| match m {
            FeedbackMarker::ExactMatch => "ExactMatch",
            FeedbackMarker::PartialMatch => "PartialMatch",
        })
        .collect();
    println!("  [{}]", order.join(", "));

    if feedback.is_perfect() {
        println!("\n{}", "✅ Code cracked!".green().bold());
    }
}

/// Print the whole board, newest attempt at the top
pub fn print_board(board: &BoardView) {
    let total = board.rows.len();
    println!("\n{}", "═".repeat(40).bright_cyan());

    for (i, row) in board.rows.iter().enumerate().rev() {
        let number = format!("{:>2}", i + 1);
        let number = if row.active {
            number.bright_yellow().bold()
        } else {
            number.bright_black()
        };
        let marker = if row.active { "◀" } else { " " };
        println!(
            "  {}  {}   {}  {}",
            number,
            code_pegs(&row.code),
            feedback_pegs(row.feedback),
            marker.bright_yellow()
        );
    }

    println!("{}", "═".repeat(40).bright_cyan());
    println!(
        "  Attempts left: [{}] {}/{}",
        create_progress_bar(board.remaining, total, 20).cyan(),
        board.remaining,
        total
    );
}
