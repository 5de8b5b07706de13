//! Common types for tic-tac-toe: board errors and observer errors.

use crate::config::NUM_CELLS;

/// Errors returned by Board operations. All are driven by user input and
/// recoverable by re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Character does not name one of the two game symbols.
    InvalidSymbol(char),
    /// Cell address is outside 1..=9.
    CellOutOfRange(usize),
    /// Target cell already holds a symbol.
    CellOccupied(usize),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidSymbol(ch) => {
                write!(f, "Symbol '{}' is not valid for tic-tac-toe; use 'X' or 'O'", ch)
            }
            BoardError::CellOutOfRange(cell) => {
                write!(f, "Cell {} is out of range; choose 1 to {}", cell, NUM_CELLS)
            }
            BoardError::CellOccupied(cell) => {
                write!(f, "Cell {} is already taken", cell)
            }
        }
    }
}

/// Errors returned by observer registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverError {
    /// Attempt to detach an observer that is not currently attached.
    NotAttached,
}

impl core::fmt::Display for ObserverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ObserverError::NotAttached => {
                write!(f, "Attempt to detach an observer which is not attached")
            }
        }
    }
}
