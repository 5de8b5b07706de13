//! Board geometry and the fixed symbol set.

use crate::symbol::Symbol;

pub const BOARD_DIM: usize = 3;
pub const NUM_CELLS: usize = BOARD_DIM * BOARD_DIM;
pub const NUM_PLAYERS: usize = 2;

/// Player 1 marks with crosses, player 2 with noughts.
pub const PLAYER_SYMBOLS: [Symbol; NUM_PLAYERS] = [Symbol::Cross, Symbol::Nought];

/// Separator drawn between board rows.
pub const HORIZONTAL_RULE: &str = "-----------";

/// Every line that completes a game: three rows, three columns and two
/// diagonals, as 0-based cell indices.
pub const WIN_LINES: [[usize; BOARD_DIM]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
