//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! They are plain data with no I/O, usable from the rules engine, the
//! input layer and the terminal renderer alike.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CODE_LEN` | 4 | Colors in a secret or a guess |
//! | `PALETTE_SIZE` | 6 | Distinct colors available |
//! | `TURN_LIMIT` | 10 | Guesses allowed before the game is lost |
//!
//! # Palette
//!
//! Colors carry a stable 1-based index which is what the player types:
//!
//! | Index | Color |
//! |-------|-------|
//! | 1 | Yellow |
//! | 2 | Blue |
//! | 3 | Red |
//! | 4 | Green |
//! | 5 | White |
//! | 6 | Magenta |
//!
//! # Examples
//!
//! ```
//! use mastermind_types::{Code, Color, GuessError, CODE_LEN};
//!
//! // Parse a guess the way a player types it
//! let code: Code = "1336".parse().unwrap();
//! assert_eq!(code[0], Color::Yellow);
//! assert_eq!(code[3], Color::Magenta);
//!
//! // Validation failures are typed
//! assert_eq!(
//!     "12".parse::<Code>(),
//!     Err(GuessError::WrongLength { expected: CODE_LEN, found: 2 })
//! );
//! ```

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use derive_more::{Display, Error};

pub mod text;

pub use text::{Lang, Messages};

/// Number of colors in a code (secret or guess)
pub const CODE_LEN: usize = 4;

/// Number of distinct colors in the palette
pub const PALETTE_SIZE: usize = 6;

/// Maximum number of evaluated guesses per game
pub const TURN_LIMIT: u32 = 10;


/// The six palette colors
///
/// Declaration order is the palette order; the 1-based position is the digit
/// the player types for that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Yellow,
    Blue,
    Red,
    Green,
    White,
    Magenta,
}

impl Color {
    /// All colors in palette order
    pub const ALL: [Color; PALETTE_SIZE] = [
        Color::Yellow,
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::White,
        Color::Magenta,
    ];

    /// Look up a color by its 1-based palette index
    ///
    /// # Examples
    ///
    /// ```
    /// use mastermind_types::Color;
    ///
    /// assert_eq!(Color::from_index(1), Some(Color::Yellow));
    /// assert_eq!(Color::from_index(6), Some(Color::Magenta));
    /// assert_eq!(Color::from_index(0), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        let slot = (index as usize).checked_sub(1)?;
        Self::ALL.get(slot).copied()
    }

    /// 1-based palette index
    pub fn index(self) -> u8 {
        self.slot() as u8 + 1
    }

    /// 0-based palette slot, suitable for indexing per-color tables
    pub fn slot(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Blue => 1,
            Color::Red => 2,
            Color::Green => 3,
            Color::White => 4,
            Color::Magenta => 5,
        }
    }

    /// Lowercase English name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::White => "white",
            Color::Magenta => "magenta",
        }
    }
}

/// An ordered sequence of [`CODE_LEN`] colors; repeats are allowed.
///
/// Used both for the secret and for each guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LEN]);

impl Code {
    pub const fn new(colors: [Color; CODE_LEN]) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[Color; CODE_LEN] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> + '_ {
        self.0.iter()
    }
}

impl Index<usize> for Code {
    type Output = Color;

    fn index(&self, idx: usize) -> &Color {
        &self.0[idx]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.0 {
            write!(f, "{}", color.index())?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = GuessError;

    /// Validate player input: exactly [`CODE_LEN`] ASCII digits, each in
    /// `1..=PALETTE_SIZE`. Whitespace is not stripped; callers reading lines
    /// remove the line terminator themselves.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != CODE_LEN {
            return Err(GuessError::WrongLength {
                expected: CODE_LEN,
                found,
            });
        }

        let mut colors = [Color::Yellow; CODE_LEN];
        for (i, ch) in s.chars().enumerate() {
            let digit = ch
                .to_digit(10)
                .ok_or(GuessError::NotADigit {
                    position: i + 1,
                    found: ch,
                })? as u8;
            colors[i] = Color::from_index(digit).ok_or(GuessError::OutOfRange {
                position: i + 1,
                digit,
            })?;
        }
        Ok(Self(colors))
    }
}

/// Standalone guess validation; same as `s.parse::<Code>()`.
pub fn parse_guess(s: &str) -> Result<Code, GuessError> {
    s.parse()
}

/// Why a line of player input is not a valid guess
///
/// Positions are 1-based, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    #[display("expected {expected} digits, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[display("character {position} ({found:?}) is not a digit")]
    NotADigit { position: usize, found: char },
    #[display("digit {digit} at position {position} is not a color between 1 and {}", PALETTE_SIZE)]
    OutOfRange { position: usize, digit: u8 },
}

/// Result of comparing a guess against the secret
///
/// - **exact**: right color in the right slot (red indicator)
/// - **partial**: right color in the wrong slot (white indicator)
///
/// `exact + partial` never exceeds [`CODE_LEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub exact: u8,
    pub partial: u8,
}

impl Feedback {
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// True when every slot matched exactly
    pub fn is_solved(&self) -> bool {
        self.exact as usize == CODE_LEN
    }
}
