//! The operation alphabet.
//!
//! Every input string is a sequence of these five symbols (whitespace aside).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One vending machine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Symbol {
    /// `$` - insert one coin.
    Coin,
    /// `R` - buy a drink.
    Purchase,
    /// `<` - take one coin back.
    Return,
    /// `{` - open a nesting level.
    Open,
    /// `}` - close the innermost nesting level.
    Close,
}

impl Symbol {
    /// All symbols, in alphabet order.
    pub const ALL: [Self; 5] = [
        Self::Coin,
        Self::Purchase,
        Self::Return,
        Self::Open,
        Self::Close,
    ];

    /// Maps a character to its symbol, if it belongs to the alphabet.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '$' => Some(Self::Coin),
            'R' => Some(Self::Purchase),
            '<' => Some(Self::Return),
            '{' => Some(Self::Open),
            '}' => Some(Self::Close),
            _ => None,
        }
    }

    /// Returns the character this symbol is written as.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Coin => '$',
            Self::Purchase => 'R',
            Self::Return => '<',
            Self::Open => '{',
            Self::Close => '}',
        }
    }

    /// Returns a human-readable name for this symbol.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Purchase => "purchase",
            Self::Return => "return",
            Self::Open => "open",
            Self::Close => "close",
        }
    }

    /// Returns true for the nesting delimiters `{` and `}`.
    #[must_use]
    pub const fn is_delimiter(self) -> bool {
        matches!(self, Self::Open | Self::Close)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}
