//! Game board state: placement validation, win/draw detection, rendering.

use alloc::string::{String, ToString};
use core::fmt;

use crate::common::BoardError;
use crate::config::{BOARD_DIM, HORIZONTAL_RULE, NUM_CELLS, WIN_LINES};
use crate::observer::{ObserverHandle, Subject};
use crate::symbol::Symbol;

/// One addressable board position. A vacant cell renders as its 1-based
/// position label; a taken cell is immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Vacant,
    Taken(Symbol),
}

impl Cell {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Cell::Vacant)
    }
}

/// Copyable snapshot of the grid. All queries and the textual rendering are
/// pure functions of this state; observers receive it on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardState {
    cells: [Cell; NUM_CELLS],
}

impl BoardState {
    /// Cell contents at a 1-based address.
    pub fn cell(&self, cell: usize) -> Result<Cell, BoardError> {
        if !(1..=NUM_CELLS).contains(&cell) {
            return Err(BoardError::CellOutOfRange(cell));
        }
        Ok(self.cells[cell - 1])
    }

    /// True when any row, column or diagonal holds three identical placed
    /// symbols. Vacant cells never match, so a line of position labels can
    /// never read as a win regardless of labelling scheme.
    pub fn is_won(&self) -> bool {
        WIN_LINES.iter().any(|line| match self.cells[line[0]] {
            Cell::Taken(symbol) => line
                .iter()
                .all(|&index| self.cells[index] == Cell::Taken(symbol)),
            Cell::Vacant => false,
        })
    }

    /// True when every cell is taken and no line is complete. Callers decide
    /// win before draw; a full board with a completed line is a win.
    pub fn is_draw(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_vacant()) && !self.is_won()
    }

    fn cell_char(&self, index: usize) -> char {
        match self.cells[index] {
            Cell::Taken(symbol) => symbol.as_char(),
            // labels are 1..=9, always a single digit
            Cell::Vacant => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            cells: [Cell::Vacant; NUM_CELLS],
        }
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_DIM {
            if row > 0 {
                write!(f, "\n{}\n", HORIZONTAL_RULE)?;
            }
            let base = row * BOARD_DIM;
            write!(
                f,
                "{} | {} | {}",
                self.cell_char(base),
                self.cell_char(base + 1),
                self.cell_char(base + 2)
            )?;
        }
        Ok(())
    }
}

/// Main board: grid state plus the observer subscriptions that keep a
/// display synchronized with it.
pub struct Board {
    state: BoardState,
    observers: Subject<BoardState>,
}

impl Board {
    /// Create a blank board with no observers attached. Each construction
    /// yields fresh state; boards never share cells.
    pub fn new() -> Self {
        Self {
            state: BoardState::default(),
            observers: Subject::new(),
        }
    }

    /// Place `symbol` at the 1-based `cell` address. On success the cell is
    /// mutated and every attached observer is notified with the updated
    /// snapshot before this returns. On failure nothing is mutated and no
    /// notification is sent.
    pub fn place(&mut self, cell: usize, symbol: Symbol) -> Result<(), BoardError> {
        if !(1..=NUM_CELLS).contains(&cell) {
            return Err(BoardError::CellOutOfRange(cell));
        }
        let index = cell - 1;
        if !self.state.cells[index].is_vacant() {
            return Err(BoardError::CellOccupied(cell));
        }
        self.state.cells[index] = Cell::Taken(symbol);
        self.observers.notify(&self.state);
        Ok(())
    }

    /// Cell contents at a 1-based address.
    pub fn cell(&self, cell: usize) -> Result<Cell, BoardError> {
        self.state.cell(cell)
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn is_draw(&self) -> bool {
        self.state.is_draw()
    }

    /// Snapshot of the current grid.
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Textual rendering of the grid; a pure projection of state.
    pub fn render(&self) -> String {
        self.state.to_string()
    }

    /// Register a display observer.
    pub fn attach(&mut self, observer: ObserverHandle<BoardState>) {
        self.observers.attach(observer);
    }

    /// Remove a previously attached display observer.
    pub fn detach(
        &mut self,
        observer: &ObserverHandle<BoardState>,
    ) -> Result<(), crate::common::ObserverError> {
        self.observers.detach(observer)
    }

    /// Re-send the current state to all observers, e.g. to paint the opening
    /// board before any placement has happened.
    pub fn refresh(&self) {
        self.observers.notify(&self.state);
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ cells: {:?}, observers: {} }}",
            self.state.cells,
            self.observers.len()
        )
    }
}
