//! Guess evaluation and feedback markers
//!
//! Feedback is kept as the two counts produced by the two evaluation passes:
//! - exact: right color in the right slot
//! - partial: right color in a different slot
//!
//! Markers are always presented exact-first, so the counts carry all the
//! information an ordered marker list would.

use super::code::{CODE_LENGTH, Code, CodeError, CodeRole};
use super::Color;
use std::fmt;

/// A single feedback peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMarker {
    /// Correct color, correct position
    ExactMatch,
    /// Correct color, wrong position
    PartialMatch,
}

/// Scored result of one guess
///
/// Only produced by scoring, so the counts never exceed the code length:
///
/// ```compile_fail
/// let feedback = mastermind::core::Feedback::new(4, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Every slot matched exactly
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// No color in common
    pub const NONE: Self = Self {
        exact: 0,
        partial: 0,
    };

    /// Build feedback from raw counts
    ///
    /// Outside the crate feedback only comes from [`Feedback::score`] and
    /// [`Feedback::evaluate`], so the counts always fit a code.
    #[inline]
    #[must_use]
    pub(crate) const fn new(exact: u8, partial: u8) -> Self {
        debug_assert!(
            (exact as usize) + (partial as usize) <= CODE_LENGTH,
            "Feedback cannot exceed the code length"
        );
        Self { exact, partial }
    }

    /// Number of exact matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of partial matches
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Total number of markers
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.exact as usize + self.partial as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Check if the guess cracked the code
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Markers in presentation order: all exact matches, then all partial matches
    pub fn markers(self) -> impl Iterator<Item = FeedbackMarker> {
        std::iter::repeat_n(FeedbackMarker::ExactMatch, self.exact as usize).chain(
            std::iter::repeat_n(FeedbackMarker::PartialMatch, self.partial as usize),
        )
    }

    /// Score `guess` against `secret`
    ///
    /// This is the total version of [`Feedback::evaluate`] for codes that are
    /// already known to be complete.
    ///
    /// # Algorithm
    /// 1. First pass: every slot where the colors agree is an exact match;
    ///    both the guess slot and the secret slot are consumed
    /// 2. Second pass: each remaining guess slot, left to right, consumes the
    ///    first remaining secret slot of the same color as a partial match
    ///
    /// A color repeated in the guess is therefore only credited as many
    /// times as it is still available in the secret.
    #[must_use]
    pub fn score(secret: &[Color; CODE_LENGTH], guess: &[Color; CODE_LENGTH]) -> Self {
        let mut guess_used = [false; CODE_LENGTH];
        let mut secret_used = [false; CODE_LENGTH];
        let mut exact = 0u8;
        let mut partial = 0u8;

        // First pass: exact matches
        // Allow: Index needed to compare guess[i], secret[i] and mark both used
        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            if guess[i] == secret[i] {
                exact += 1;
                guess_used[i] = true;
                secret_used[i] = true;
            }
        }

        // Second pass: partial matches from what is left
        for (i, &color) in guess.iter().enumerate() {
            if guess_used[i] {
                continue;
            }
            let found = (0..CODE_LENGTH).find(|&j| !secret_used[j] && secret[j] == color);
            if let Some(j) = found {
                secret_used[j] = true;
                partial += 1;
            }
        }

        Self::new(exact, partial)
    }

    /// Score a guess against the secret, rejecting incomplete codes
    ///
    /// # Errors
    /// Returns `CodeError::IncompleteCode` if either code has an empty slot.
    /// Callers are expected to check completeness first, so this signals a
    /// skipped precondition rather than bad player input.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, FeedbackMarker};
    ///
    /// let secret: Code = "RYGB".parse().unwrap();
    /// let guess: Code = "YRGP".parse().unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess).unwrap();
    ///
    /// let markers: Vec<_> = feedback.markers().collect();
    /// assert_eq!(
    ///     markers,
    ///     [
    ///         FeedbackMarker::ExactMatch,
    ///         FeedbackMarker::PartialMatch,
    ///         FeedbackMarker::PartialMatch,
    ///     ]
    /// );
    /// ```
    pub fn evaluate(secret: &Code, guess: &Code) -> Result<Self, CodeError> {
        let secret = secret.colors(CodeRole::Secret)?;
        let guess = guess.colors(CodeRole::Guess)?;
        Ok(Self::score(&secret, &guess))
    }

    /// Compact text form: `X` per exact match, `o` per partial match
    #[must_use]
    pub fn to_pegs(self) -> String {
        self.markers()
            .map(|m| match m {
                FeedbackMarker::ExactMatch => 'X',
                FeedbackMarker::PartialMatch => 'o',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", self.to_pegs())
        }
    }
}
