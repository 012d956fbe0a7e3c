//! Game session state machine
//!
//! A `Session` owns the secret, the attempt rows and the game state. Every
//! player action is an `Event` applied with [`Session::apply`]; actions that
//! are not allowed in the current state are ignored rather than reported as
//! errors, since a front end is expected to disable them anyway.

use super::generator::{RandomSource, SecretSource};
use super::view::{BoardView, RowView};
use crate::config::GameConfig;
use crate::core::{CODE_LENGTH, Code, CodeRole, Color, Feedback};
use tracing::{debug, info, instrument};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the player to complete and submit attempt `active`
    InProgress { active: usize },
    /// An attempt matched the secret exactly
    Won,
    /// Every attempt was used without a match
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// One row of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attempt {
    code: Code,
    feedback: Option<Feedback>,
}

impl Attempt {
    /// The played (or in-progress) code
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    /// Feedback, once the attempt has been verified
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.feedback.is_some()
    }
}

/// A player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Put a color in the first empty slot of the active attempt
    PlaceColor(Color),
    /// Take the color out of a slot of the active attempt
    RemoveColor(usize),
    /// Verify the active attempt against the secret
    Submit,
    /// Start over with a new secret
    Reset,
}

/// Why an event had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The game is won or lost; only a reset is accepted
    GameOver,
    /// The active attempt has no empty slot left
    CodeFull,
    /// The slot to clear is empty or does not exist
    EmptySlot,
    /// The active attempt still has empty slots
    IncompleteGuess,
}

/// Result of applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// A single Mastermind game
#[derive(Debug, Clone)]
pub struct Session<S: SecretSource = RandomSource> {
    source: S,
    secret: [Color; CODE_LENGTH],
    attempts: Vec<Attempt>,
    state: GameState,
}

impl Session<RandomSource> {
    /// Start a game with a random secret
    ///
    /// # Examples
    /// ```
    /// use mastermind::config::GameConfig;
    /// use mastermind::core::Color;
    /// use mastermind::game::{Event, GameState, Session};
    ///
    /// let mut session = Session::new(&GameConfig::default().with_seed(3));
    /// assert_eq!(session.state(), GameState::InProgress { active: 0 });
    ///
    /// for _ in 0..4 {
    ///     session.apply(Event::PlaceColor(Color::Red));
    /// }
    /// assert!(session.apply(Event::Submit).is_applied());
    /// assert!(session.attempts()[0].is_verified());
    /// ```
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_source(config, RandomSource::from_config(config))
    }
}

impl<S: SecretSource> Session<S> {
    /// Start a game drawing secrets from `source`
    #[instrument(skip(source), fields(max_attempts = config.max_attempts()))]
    pub fn with_source(config: &GameConfig, mut source: S) -> Self {
        let secret = source.generate();
        info!("New session");
        Self {
            source,
            secret,
            attempts: vec![Attempt::default(); config.max_attempts()],
            state: GameState::InProgress { active: 0 },
        }
    }

    /// Apply one player action
    pub fn apply(&mut self, event: Event) -> Outcome {
        let outcome = match event {
            Event::PlaceColor(color) => self.place_color(color),
            Event::RemoveColor(slot) => self.remove_color(slot),
            Event::Submit => self.submit(),
            Event::Reset => {
                self.reset();
                Outcome::Applied
            }
        };
        if let Outcome::Ignored(reason) = outcome {
            debug!(?event, ?reason, "Event ignored");
        }
        outcome
    }

    /// Fill the first empty slot of the active attempt
    pub fn place_color(&mut self, color: Color) -> Outcome {
        let Some(attempt) = self.active_attempt_mut() else {
            return Outcome::Ignored(IgnoreReason::GameOver);
        };
        match attempt.code.place(color) {
            Some(_) => Outcome::Applied,
            None => Outcome::Ignored(IgnoreReason::CodeFull),
        }
    }

    /// Clear `slot` of the active attempt, closing the gap
    pub fn remove_color(&mut self, slot: usize) -> Outcome {
        let Some(attempt) = self.active_attempt_mut() else {
            return Outcome::Ignored(IgnoreReason::GameOver);
        };
        match attempt.code.remove(slot) {
            Some(_) => Outcome::Applied,
            None => Outcome::Ignored(IgnoreReason::EmptySlot),
        }
    }

    /// Verify the active attempt and advance the game
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit(&mut self) -> Outcome {
        let GameState::InProgress { active } = self.state else {
            return Outcome::Ignored(IgnoreReason::GameOver);
        };
        let attempt = &mut self.attempts[active];
        let Ok(guess) = attempt.code.colors(CodeRole::Guess) else {
            return Outcome::Ignored(IgnoreReason::IncompleteGuess);
        };

        let feedback = Feedback::score(&self.secret, &guess);
        attempt.feedback = Some(feedback);
        let code = attempt.code;

        self.state = if feedback.is_perfect() {
            GameState::Won
        } else if active + 1 >= self.attempts.len() {
            GameState::Lost
        } else {
            GameState::InProgress { active: active + 1 }
        };

        info!(
            attempt = active + 1,
            guess = %code,
            feedback = %feedback,
            next = ?self.state,
            "Attempt verified"
        );
        Outcome::Applied
    }

    /// Draw a new secret and clear every attempt
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn reset(&mut self) {
        self.secret = self.source.generate();
        self.attempts.fill(Attempt::default());
        self.state = GameState::InProgress { active: 0 };
        info!("Session reset");
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    /// Index of the editable attempt, if the game is still running
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        match self.state {
            GameState::InProgress { active } => Some(active),
            GameState::Won | GameState::Lost => None,
        }
    }

    /// The editable attempt, if the game is still running
    #[must_use]
    pub fn active_attempt(&self) -> Option<&Attempt> {
        self.active_index().map(|i| &self.attempts[i])
    }

    fn active_attempt_mut(&mut self) -> Option<&mut Attempt> {
        self.active_index().map(|i| &mut self.attempts[i])
    }

    /// All attempt rows, including the empty ones
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.attempts.len()
    }

    /// Attempts that have not been verified yet
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.attempts.len() - self.attempts.iter().filter(|a| a.is_verified()).count()
    }

    /// The secret code
    ///
    /// Front ends should only show this once the game is over.
    #[must_use]
    pub const fn secret(&self) -> Code {
        Code::new(self.secret)
    }

    /// Snapshot for rendering
    ///
    /// The secret is only included once the game is over.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let active = self.active_index();
        let rows = self
            .attempts
            .iter()
            .enumerate()
            .map(|(i, attempt)| RowView {
                code: attempt.code,
                feedback: attempt.feedback,
                active: active == Some(i),
            })
            .collect();

        BoardView {
            rows,
            over: self.is_over(),
            won: self.is_won(),
            remaining: self.remaining_attempts(),
            secret: self.is_over().then(|| self.secret()),
        }
    }
}
