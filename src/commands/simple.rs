//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::config::GameConfig;
use crate::core::Color;
use crate::game::{Event, GameState, IgnoreReason, Outcome, Session};
use crate::output::formatters::code_pegs;
use crate::output::{print_board, print_palette};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place these colors, left to right
    Place(Vec<Color>),
    /// Remove the color at a 0-based slot
    Remove(usize),
    Submit,
    New,
    Quit,
    Help,
}

/// Parse a line of input
///
/// - color letters (`RYGB`, `ry`, ...) place colors
/// - `-N` removes the color in slot N (1-based)
/// - an empty line or `submit` submits the attempt
///
/// # Errors
///
/// Returns a message describing the problem if the line is not understood.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "" | "submit" | "s" => return Ok(Command::Submit),
        "new" | "n" => return Ok(Command::New),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "help" | "h" | "?" => return Ok(Command::Help),
        _ => {}
    }

    if let Some(slot) = input.strip_prefix('-') {
        return match slot.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Command::Remove(n - 1)),
            _ => Err(format!("Invalid slot '{slot}', use -1 to -4")),
        };
    }

    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Color::from_letter(c).ok_or_else(|| format!("Unknown color '{c}'")))
        .collect::<Result<Vec<_>, _>>()
        .map(Command::Place)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Crack the hidden {}-color code in {} attempts.",
        crate::core::CODE_LENGTH,
        config.max_attempts()
    );
    println!("Colors may repeat. After each attempt you get:");
    println!("  ● right color, right position");
    println!("  ○ right color, wrong position\n");
    print_palette();
    print_help();

    let mut session = Session::new(config);
    let mut games = 0usize;
    let mut wins = 0usize;

    loop {
        print_board(&session.view());

        if session.is_over() {
            games += 1;
            if session.is_won() {
                wins += 1;
            }
            print_game_over(&session);
            println!("  Record: {wins}/{games} won\n");

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.apply(Event::Reset);
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let GameState::InProgress { active } = session.state() else {
            continue;
        };
        let prompt = format!("Attempt {}/{}", active + 1, session.max_attempts());

        let command = match parse_command(&get_user_input(&prompt)?) {
            Ok(command) => command,
            Err(msg) => {
                println!("❌ {msg}");
                continue;
            }
        };

        match command {
            Command::Place(colors) => {
                for color in colors {
                    if session.apply(Event::PlaceColor(color))
                        == Outcome::Ignored(IgnoreReason::CodeFull)
                    {
                        println!("Row is full; '-N' removes a color, Enter submits.");
                        break;
                    }
                }
            }
            Command::Remove(slot) => {
                if !session.apply(Event::RemoveColor(slot)).is_applied() {
                    println!("Slot {} is empty.", slot + 1);
                }
            }
            Command::Submit => {
                if !session.apply(Event::Submit).is_applied() {
                    println!("Fill all four slots before submitting.");
                }
            }
            Command::New => {
                session.apply(Event::Reset);
                println!("\n🔄 New game started!");
            }
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => {
                print_palette();
                print_help();
            }
        }
    }
}

fn print_help() {
    println!("  Type color letters to fill the row, '-N' to remove slot N,");
    println!("  Enter to submit, 'new' for a new game, 'quit' to exit.\n");
}

fn print_game_over<S: crate::game::SecretSource>(session: &Session<S>) {
    let secret = session.secret();
    if session.is_won() {
        let used = session.max_attempts() - session.remaining_attempts();
        println!("\n{}", "    🎉  C O D E   C R A C K E D !  🎉    ".bright_green().bold());
        println!(
            "\n  Solved in {} {}",
            used.to_string().bright_cyan().bold(),
            if used == 1 { "attempt" } else { "attempts" }
        );
    } else {
        println!("\n{}", "    💥  Out of attempts  💥    ".bright_red().bold());
    }
    println!("  The code was: {}  {}", code_pegs(&secret), secret);
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_colors() {
        assert_eq!(
            parse_command("ryGb"),
            Ok(Command::Place(vec![
                Color::Red,
                Color::Yellow,
                Color::Green,
                Color::Blue
            ]))
        );
        assert_eq!(
            parse_command("k c"),
            Ok(Command::Place(vec![Color::Pink, Color::Cyan]))
        );
    }

    #[test]
    fn parse_remove_is_one_based() {
        assert_eq!(parse_command("-1"), Ok(Command::Remove(0)));
        assert_eq!(parse_command(" -4 "), Ok(Command::Remove(3)));
        assert!(parse_command("-0").is_err());
        assert!(parse_command("-x").is_err());
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command(""), Ok(Command::Submit));
        assert_eq!(parse_command("SUBMIT"), Ok(Command::Submit));
        assert_eq!(parse_command("new"), Ok(Command::New));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn parse_unknown_color() {
        assert_eq!(parse_command("rz"), Err("Unknown color 'z'".to_string()));
    }
}
