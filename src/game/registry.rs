//! Session registry
//!
//! Exposes the game as a keyed session API. Each session sits behind its own
//! lock so transitions on one session are serialized while different
//! sessions never contend. The map lock is only held for lookups and
//! inserts.

use super::session::{Event, Outcome, Session};
use super::view::BoardView;
use crate::config::GameConfig;
use crate::core::Color;
use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Opaque session handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("session-{_0}")]
pub struct SessionId(u64);

/// Errors from the session API
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    #[display("unknown session: {_0}")]
    UnknownSession(#[error(not(source))] SessionId),
}

type SharedSession = Arc<Mutex<Session>>;

/// All live sessions
#[derive(Debug, Default)]
pub struct SessionRegistry {
    next_id: AtomicU64,
    sessions: Mutex<FxHashMap<SessionId, SharedSession>>,
}

/// Sessions only change through whole transitions, so a panic elsewhere
/// cannot leave one half-updated.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game and return its handle
    #[instrument(skip(self))]
    pub fn new_session(&self, config: &GameConfig) -> SessionId {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = Arc::new(Mutex::new(Session::new(config)));
        lock(&self.sessions).insert(id, session);
        info!(%id, "Session created");
        id
    }

    /// Drop a session
    ///
    /// # Errors
    /// Returns `RegistryError::UnknownSession` if `id` is not live.
    #[instrument(skip(self))]
    pub fn end_session(&self, id: SessionId) -> Result<(), RegistryError> {
        match lock(&self.sessions).remove(&id) {
            Some(_) => {
                info!(%id, "Session ended");
                Ok(())
            }
            None => {
                warn!(%id, "Tried to end unknown session");
                Err(RegistryError::UnknownSession(id))
            }
        }
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn handle(&self, id: SessionId) -> Result<SharedSession, RegistryError> {
        lock(&self.sessions).get(&id).cloned().ok_or_else(|| {
            debug!(%id, "Session not found");
            RegistryError::UnknownSession(id)
        })
    }

    /// Run `f` with exclusive access to one session
    fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, RegistryError> {
        let handle = self.handle(id)?;
        let mut session = lock(&handle);
        Ok(f(&mut session))
    }

    /// Apply an event to a session
    ///
    /// # Errors
    /// Returns `RegistryError::UnknownSession` if `id` is not live.
    #[instrument(skip(self))]
    pub fn apply(&self, id: SessionId, event: Event) -> Result<Outcome, RegistryError> {
        self.with_session(id, |session| session.apply(event))
    }

    /// # Errors
    /// Returns `RegistryError::UnknownSession` if `id` is not live.
    pub fn place_color(&self, id: SessionId, color: Color) -> Result<Outcome, RegistryError> {
        self.apply(id, Event::PlaceColor(color))
    }

    /// # Errors
    /// Returns `RegistryError::UnknownSession` if `id` is not live.
    pub fn remove_color(&self, id: SessionId, slot: usize) -> Result<Outcome, RegistryError> {
        self.apply(id, Event::RemoveColor(slot))
    }

    /// Verify the active attempt and return the updated board
    ///
    /// The board is read under the same lock as the submit, so it reflects
    /// exactly this transition.
    ///
    /// # Errors
    /// Returns `RegistryError::UnknownSession` if `id` is not live.
    #[instrument(skip(self))]
    pub fn submit(&self, id: SessionId) -> Result<BoardView, RegistryError> {
        self.with_session(id, |session| {
            session.apply(Event::Submit);
            session.view()
        })
    }

    /// # Errors
    /// Returns `RegistryError::UnknownSession` if `id` is not live.
    pub fn reset(&self, id: SessionId) -> Result<(), RegistryError> {
        self.apply(id, Event::Reset).map(|_| ())
    }

    /// # Errors
    /// Returns `RegistryError::UnknownSession` if `id` is not live.
    pub fn view(&self, id: SessionId) -> Result<BoardView, RegistryError> {
        self.with_session(id, |session| session.view())
    }
}
