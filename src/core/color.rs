//! Peg colors
//!
//! The palette is fixed at eight colors. Each color has a one-letter key used
//! for keyboard entry and for parsing codes from the command line.

use std::fmt;

/// Number of colors in the palette
pub const PALETTE_SIZE: usize = 8;

/// A peg color
///
/// Colors only carry identity; the declaration order is the palette order
/// shown to the player and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Orange,
    Purple,
    Cyan,
    Pink,
}

impl Color {
    /// The full palette, in display order
    pub const ALL: [Self; PALETTE_SIZE] = [
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Purple,
        Self::Cyan,
        Self::Pink,
    ];

    /// Look up a color by its palette position (0-7)
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PALETTE_SIZE {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Upper-case key letter for this color
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Orange => 'O',
            Self::Purple => 'P',
            Self::Cyan => 'C',
            Self::Pink => 'K',
        }
    }

    /// Parse a key letter (case insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_letter('k'), Some(Color::Pink));
    /// assert_eq!(Color::from_letter('x'), None);
    /// ```
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.letter() == upper)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
