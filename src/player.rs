//! Player identity and turn alternation.

use core::fmt;

use crate::symbol::Symbol;

/// A participant: ordinal (1 or 2) and assigned symbol, fixed for the whole
/// game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    number: u8,
    symbol: Symbol,
}

impl Player {
    pub const fn new(number: u8, symbol: Symbol) -> Self {
        Self { number, symbol }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} ({})", self.number, self.symbol)
    }
}

/// Alternates the active player ordinal between 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTracker {
    active: u8,
}

impl TurnTracker {
    /// Player 1 opens the game.
    pub fn new() -> Self {
        Self { active: 1 }
    }

    /// Ordinal of the player whose turn it is.
    pub fn active(&self) -> u8 {
        self.active
    }

    /// Pass the turn to the other player. Cyclic over exactly two players:
    /// applying this twice returns to the original player.
    pub fn next_turn(&mut self) {
        self.active = if self.active == 1 { 2 } else { 1 };
    }
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new()
    }
}
