#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::cell::RefCell;
#[cfg(feature = "std")]
use std::rc::Rc;

#[cfg(feature = "std")]
use clap::Parser;

#[cfg(feature = "std")]
use tictactoe::{BoardState, ConsoleIo, ConsolePresenter, Game, ObserverHandle, Outcome};

#[derive(Parser)]
#[command(author, version, about = "Two-player tic-tac-toe at the console", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Do not clear the terminal between redraws (useful when piping output).
    #[arg(long)]
    no_clear: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tictactoe::init_logging();

    let mut io = ConsoleIo::stdio();
    loop {
        // fresh board, presenter and turn state every round
        let presenter: ObserverHandle<BoardState> =
            Rc::new(RefCell::new(ConsolePresenter::stdout(!cli.no_clear)));
        let mut game = Game::new();
        game.board_mut().attach(presenter);

        match game.run(&mut io)? {
            Outcome::Won(player) => log::debug!("round finished, player {} won", player),
            Outcome::Draw => log::debug!("round finished drawn"),
        }

        if !io.get_yes_or_no("Play again? [y/n]: ")? {
            break;
        }
    }
    Ok(())
}
