#![cfg(feature = "std")]

//! Console presenter: the display half of the model-view split. Attached to
//! the board as an observer, it repaints the whole screen whenever the board
//! changes.

use std::io::{self, Stdout, Write};

use crate::board::BoardState;
use crate::observer::Observer;

const TITLE: &str = r"
 _____ _        _____            _____
|_   _(_) ___  |_   _|_ _  ___  |_   _|__   ___
  | | | |/ __|   | |/ _` |/ __|   | |/ _ \ / _ \
  | | | | (__    | | (_| | (__    | | (_) |  __/
  |_| |_|\___|   |_|\__,_|\___|   |_|\___/ \___|";

const INSTRUCTIONS: &str = "
Welcome to tic-tac-toe!

Take it in turns to enter the number of the square in which
you would like to place an 'X' or an 'O'.

Get three in a row to win!
";

// ANSI clear-screen plus cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Repaints banner, instructions and board on every update.
pub struct ConsolePresenter<W: Write> {
    writer: W,
    clear_screen: bool,
}

impl ConsolePresenter<Stdout> {
    /// Presenter bound to the process's stdout.
    pub fn stdout(clear_screen: bool) -> Self {
        Self::new(io::stdout(), clear_screen)
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(writer: W, clear_screen: bool) -> Self {
        Self {
            writer,
            clear_screen,
        }
    }

    fn redraw(&mut self, state: &BoardState) -> io::Result<()> {
        if self.clear_screen {
            write!(self.writer, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.writer, "{}", TITLE)?;
        writeln!(self.writer, "{}", INSTRUCTIONS)?;
        writeln!(self.writer, "{}", state)?;
        self.writer.flush()
    }
}

impl<W: Write> Observer<BoardState> for ConsolePresenter<W> {
    fn update(&mut self, subject: &BoardState) {
        if let Err(err) = self.redraw(subject) {
            log::warn!("console redraw failed: {}", err);
        }
    }
}
