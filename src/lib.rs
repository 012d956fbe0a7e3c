//! Mastermind
//!
//! Terminal Mastermind: a hidden four-color code, ten attempts, and exact /
//! partial feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback};
//!
//! let secret: Code = "RRGB".parse().unwrap();
//! let guess: Code = "RGGG".parse().unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess).unwrap();
//! assert_eq!((feedback.exact(), feedback.partial()), (2, 0));
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
