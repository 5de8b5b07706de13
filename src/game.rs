#![cfg(feature = "std")]

//! Game loop: drives the turn sequence, applies moves to the board and stops
//! on the first terminal condition.

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::config::{NUM_CELLS, PLAYER_SYMBOLS};
use crate::console::ConsoleIo;
use crate::player::{Player, TurnTracker};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The named player completed a line.
    Won(u8),
    /// Full board, no line.
    Draw,
}

/// Controller owning the board, the turn tracker and the two players.
pub struct Game {
    board: Board,
    turns: TurnTracker,
    players: [Player; 2],
}

impl Game {
    /// Fresh game: blank board, player 1 to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turns: TurnTracker::new(),
            players: [
                Player::new(1, PLAYER_SYMBOLS[0]),
                Player::new(2, PLAYER_SYMBOLS[1]),
            ],
        }
    }

    /// Board access, e.g. for attaching a presenter before the game starts.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the game to completion over the given console. Board errors are
    /// reported and the same player re-prompted, without limit; only stream
    /// failure aborts the loop.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        io: &mut ConsoleIo<R, W>,
    ) -> io::Result<Outcome> {
        // paint the opening board before the first prompt
        self.board.refresh();
        loop {
            let player = self.players[(self.turns.active() - 1) as usize];
            let prompt = format!("{}, choose a cell [1-{}]: ", player, NUM_CELLS);
            let cell = io.get_validated_int(&prompt, |value| {
                (1..=NUM_CELLS as i64).contains(&value)
            })?;
            if let Err(err) = self.board.place(cell as usize, player.symbol()) {
                io.write_line(&format!("{}.", err))?;
                continue;
            }
            log::debug!("player {} placed {} at cell {}", player.number(), player.symbol(), cell);
            if self.board.is_won() {
                log::info!("player {} won", player.number());
                io.write_line(&format!("{} wins!", player))?;
                return Ok(Outcome::Won(player.number()));
            }
            if self.board.is_draw() {
                log::info!("game drawn");
                io.write_line("It's a draw!")?;
                return Ok(Outcome::Draw);
            }
            self.turns.next_turn();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
