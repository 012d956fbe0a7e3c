//! Game sessions
//!
//! Secret generation, the per-game state machine, the read model for front
//! ends and a keyed registry for hosting many sessions.

mod generator;
mod registry;
mod session;
mod view;

pub use generator::{RandomSource, SecretSource};
pub use registry::{RegistryError, SessionId, SessionRegistry};
pub use session::{Attempt, Event, GameState, IgnoreReason, Outcome, Session};
pub use view::{BoardView, RowView};
