//! Logical control identities
//!
//! Keys and lamps are identified by a letter of the machine alphabet,
//! rotor windows by their slot index. Identities are immutable once
//! assigned and carry no display state.
//!
//! ## Design Principles
//! - **Unrepresentable errors**: a `Letter` is always one of the 26 symbols
//! - **Case insensitive**: 'q' and 'Q' name the same control
//! - **Stable order**: `Letter::ALL` is alphabet order, which is also hit-test order

use std::fmt;

/// Number of letters in the machine alphabet
pub const ALPHABET_LEN: usize = 26;

/// Error returned when a character is outside the machine alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLetter(pub char);

impl fmt::Display for InvalidLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a letter of the machine alphabet", self.0)
    }
}

impl std::error::Error for InvalidLetter {}

/// One of the 26 letters `A..=Z`
///
/// Stored as its zero-based alphabet index so it can be used directly
/// to index per-letter tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Every letter in alphabet order
    pub const ALL: [Letter; ALPHABET_LEN] = {
        let mut all = [Letter(0); ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            all[i] = Letter(i as u8);
            i += 1;
        }
        all
    };

    /// Converts a character to a letter (case insensitive)
    ///
    /// # Examples
    /// ```rust
    /// use enigma_view::domain::control::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Letter::from_char('Q'));
    /// assert!(Letter::from_char('1').is_none());
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Letter(upper as u8 - b'A'))
        } else {
            None
        }
    }

    /// Converts a zero-based alphabet index to a letter
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based alphabet index (A = 0)
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter
    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidLetter;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::from_char(ch).ok_or(InvalidLetter(ch))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Logical control resolved from a pointer location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A keyboard key
    Key(Letter),
    /// A rotor click zone, by slot index
    Rotor(usize),
}
