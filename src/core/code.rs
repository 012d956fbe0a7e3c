//! Four-slot codes
//!
//! A `Code` is used both for the secret and for a guess being edited. Slots
//! are filled left to right and removals close the gap, so a code is always
//! a run of filled slots followed by a run of empty ones.

use super::Color;
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;

/// Number of slots in every code
pub const CODE_LENGTH: usize = 4;

/// Which side of an evaluation a code came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CodeRole {
    #[display("secret")]
    Secret,
    #[display("guess")]
    Guess,
}

/// Errors produced when building or evaluating codes
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CodeError {
    /// A code handed to the evaluator still has an empty slot
    #[display("{role} has an empty slot at position {slot}")]
    IncompleteCode { role: CodeRole, slot: usize },
    #[display("code must be exactly 4 colors, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("unknown color '{_0}' (expected one of R Y G B O P C K)")]
    UnknownColor(#[error(not(source))] char),
}

/// An ordered sequence of four optional colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Code([Option<Color>; CODE_LENGTH]);

impl Code {
    /// A code with every slot empty
    pub const EMPTY: Self = Self([None; CODE_LENGTH]);

    /// Build a fully filled code
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self([
            Some(colors[0]),
            Some(colors[1]),
            Some(colors[2]),
            Some(colors[3]),
        ])
    }

    /// Raw slot view
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.0
    }

    /// Color at `slot`, or `None` if the slot is empty or out of range
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.0.get(slot).copied().flatten()
    }

    /// Number of filled slots
    #[must_use]
    pub fn filled(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Put `color` into the first empty slot
    ///
    /// Returns the slot that was filled, or `None` when the code is already full.
    pub fn place(&mut self, color: Color) -> Option<usize> {
        let slot = self.0.iter().position(Option::is_none)?;
        self.0[slot] = Some(color);
        Some(slot)
    }

    /// Remove the color at `slot`, shifting the following slots left
    ///
    /// The last slot always ends up empty. Returns the removed color, or
    /// `None` when `slot` is out of range or already empty.
    pub fn remove(&mut self, slot: usize) -> Option<Color> {
        let removed = self.get(slot)?;
        self.0.copy_within(slot + 1.., slot);
        self.0[CODE_LENGTH - 1] = None;
        Some(removed)
    }

    /// All four colors, if every slot is filled
    ///
    /// # Errors
    /// Returns `CodeError::IncompleteCode` naming the first empty slot.
    pub fn colors(&self, role: CodeRole) -> Result<[Color; CODE_LENGTH], CodeError> {
        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, (out, color)) in colors.iter_mut().zip(self.0).enumerate() {
            *out = color.ok_or(CodeError::IncompleteCode { role, slot })?;
        }
        Ok(colors)
    }
}

impl From<[Color; CODE_LENGTH]> for Code {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self::new(colors)
    }
}

/// Parses a string of four color letters such as `"RYGB"`
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Color};
///
/// let code: Code = "rygb".parse().unwrap();
/// assert_eq!(code.get(3), Some(Color::Blue));
/// assert!("RYG".parse::<Code>().is_err());
/// ```
impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.trim().chars().collect();
        if letters.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(letters.len()));
        }

        let mut code = Self::EMPTY;
        for letter in letters {
            let color = Color::from_letter(letter).ok_or(CodeError::UnknownColor(letter))?;
            code.place(color);
        }
        Ok(code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(color) => write!(f, "{color}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Red, Yellow};

    #[test]
    fn place_fills_left_to_right() {
        let mut code = Code::EMPTY;
        assert_eq!(code.place(Red), Some(0));
        assert_eq!(code.place(Green), Some(1));
        assert_eq!(code.filled(), 2);
        assert_eq!(code.to_string(), "RG__");
    }

    #[test]
    fn place_on_full_code_is_rejected() {
        let mut code = Code::new([Red, Yellow, Green, Blue]);
        assert_eq!(code.place(Red), None);
        assert_eq!(code, Code::new([Red, Yellow, Green, Blue]));
    }

    #[test]
    fn remove_compacts_left() {
        let mut code = Code::new([Red, Yellow, Green, Blue]);
        assert_eq!(code.remove(1), Some(Yellow));
        assert_eq!(code.slots(), &[Some(Red), Some(Green), Some(Blue), None]);
    }

    #[test]
    fn remove_last_slot() {
        let mut code = Code::new([Red, Yellow, Green, Blue]);
        assert_eq!(code.remove(3), Some(Blue));
        assert_eq!(code.to_string(), "RYG_");
    }

    #[test]
    fn remove_empty_or_out_of_range() {
        let mut code = Code::EMPTY;
        code.place(Red);
        assert_eq!(code.remove(2), None);
        assert_eq!(code.remove(9), None);
        assert_eq!(code.to_string(), "R___");
    }

    #[test]
    fn remove_then_place_leaves_no_gap() {
        let mut code = Code::EMPTY;
        for color in [Red, Yellow, Green] {
            code.place(color);
        }
        code.remove(0);
        code.place(Blue);
        assert_eq!(code.slots(), &[Some(Yellow), Some(Green), Some(Blue), None]);

        let filled = code.filled();
        assert!(code.slots()[..filled].iter().all(Option::is_some));
        assert!(code.slots()[filled..].iter().all(Option::is_none));
    }

    #[test]
    fn colors_reports_first_empty_slot() {
        let mut code = Code::EMPTY;
        code.place(Red);
        code.place(Red);
        assert_eq!(
            code.colors(CodeRole::Guess),
            Err(CodeError::IncompleteCode {
                role: CodeRole::Guess,
                slot: 2
            })
        );
    }

    #[test]
    fn parse_valid_and_invalid() {
        let code: Code = " ryGB ".parse().unwrap();
        assert_eq!(code, Code::new([Red, Yellow, Green, Blue]));

        assert_eq!("RYGBR".parse::<Code>(), Err(CodeError::InvalidLength(5)));
        assert_eq!("RYGX".parse::<Code>(), Err(CodeError::UnknownColor('X')));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = CodeError::IncompleteCode {
            role: CodeRole::Secret,
            slot: 1,
        };
        assert_eq!(err.to_string(), "secret has an empty slot at position 1");
    }
}
