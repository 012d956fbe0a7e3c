//! Core domain types for Mastermind
//!
//! Colors, codes and feedback scoring. Everything here is pure and has no
//! knowledge of sessions, randomness or terminals.

mod code;
mod color;
mod feedback;

pub use code::{CODE_LENGTH, Code, CodeError, CodeRole};
pub use color::{Color, PALETTE_SIZE};
pub use feedback::{Feedback, FeedbackMarker};
