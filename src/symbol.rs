//! Player symbols: the fixed two-mark set.

use core::fmt;

use crate::common::BoardError;

/// A player's mark. Exactly two values exist; anything else is rejected at
/// the parsing boundary, so placement code never sees an invalid symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Cross,
    Nought,
}

impl Symbol {
    /// Character drawn on the board for this symbol.
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Cross => 'X',
            Symbol::Nought => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = BoardError;

    /// Case-insensitive: `x`/`X` and `o`/`O` are accepted.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch.to_ascii_uppercase() {
            'X' => Ok(Symbol::Cross),
            'O' => Ok(Symbol::Nought),
            _ => Err(BoardError::InvalidSymbol(ch)),
        }
    }
}
