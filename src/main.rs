//! Mastermind - CLI
//!
//! Play in a full-screen TUI or a plain line mode, or score a single guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_simple, score_codes},
    config::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    interactive::{App, run_tui},
    output::print_score_result,
};
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack a hidden four-color code with exact and partial feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of attempts per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for reproducible secrets
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a secret, e.g. `score RYGB YRGP`
    Score {
        /// Secret code as four color letters (R Y G B O P C K)
        secret: String,

        /// Guess as four color letters
        guess: String,
    },
}

/// Log to stderr, or to a file while the TUI owns the terminal
///
/// Filter comes from `RUST_LOG`, defaulting to warnings only.
fn init_logging(tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if tui {
        let log_file = File::create("mastermind.log")?;
        // Don't panic if already initialized
        let _ = builder
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .try_init();
    } else {
        // Don't panic if already initialized
        let _ = builder.with_writer(std::io::stderr).try_init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    let mut config = GameConfig::new(cli.attempts)?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    info!(?config, "Starting");

    match command {
        Commands::Play => run_tui(App::new(&config)),
        Commands::Simple => run_simple(&config),
        Commands::Score { secret, guess } => {
            let result = score_codes(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
    }
}
