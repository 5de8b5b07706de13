use std::cell::RefCell;
use std::rc::Rc;

use tictactoe::{BoardState, Cell, ConsoleIo, Game, Observer, Outcome, Symbol};

fn scripted(script: &str) -> ConsoleIo<&[u8], Vec<u8>> {
    ConsoleIo::new(script.as_bytes(), Vec::new())
}

fn run_game(script: &str) -> (Game, Outcome, String) {
    let mut io = scripted(script);
    let mut game = Game::new();
    let outcome = game.run(&mut io).unwrap();
    let (_, output) = io.into_parts();
    (game, outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_player_one_wins_top_row() {
    // X: 1 2 3, O: 4 5
    let (game, outcome, output) = run_game("1\n4\n2\n5\n3\n");
    assert_eq!(outcome, Outcome::Won(1));
    assert!(output.contains("Player 1 (X) wins!"));
    assert_eq!(game.board().cell(3).unwrap(), Cell::Taken(Symbol::Cross));
}

#[test]
fn test_player_two_wins_middle_column() {
    // X: 1 3 9, O: 2 5 8
    let (_, outcome, output) = run_game("1\n2\n3\n5\n9\n8\n");
    assert_eq!(outcome, Outcome::Won(2));
    assert!(output.contains("Player 2 (O) wins!"));
}

#[test]
fn test_alternating_fill_without_line_is_a_draw() {
    // ends as  X O X / X O O / O X X
    let (game, outcome, output) = run_game("1\n2\n3\n5\n4\n6\n8\n7\n9\n");
    assert_eq!(outcome, Outcome::Draw);
    assert!(output.contains("It's a draw!"));
    assert!(!game.board().is_won());
    assert!(game.board().is_draw());
}

#[test]
fn test_occupied_cell_reprompts_the_same_player() {
    // X takes 5; O tries 5, is rejected, then takes 1; X finishes the
    // 3-5-7 diagonal.
    let (game, outcome, output) = run_game("5\n5\n1\n3\n2\n7\n");
    assert_eq!(outcome, Outcome::Won(1));
    assert!(output.contains("Cell 5 is already taken"));
    // the retried move still belonged to player 2
    assert_eq!(game.board().cell(1).unwrap(), Cell::Taken(Symbol::Nought));
}

#[test]
fn test_invalid_input_is_rejected_before_reaching_the_board() {
    // junk, out-of-range and in-range-but-invalid lines are all consumed by
    // the console layer before a move is applied
    let (_, outcome, output) = run_game("banana\n0\n12\n1\n4\n2\n5\n3\n");
    assert_eq!(outcome, Outcome::Won(1));
    assert!(output.contains("Input 'banana' is not a whole number."));
    assert!(output.contains("Input '0' is not an acceptable value."));
    assert!(output.contains("Input '12' is not an acceptable value."));
}

struct RenderLog(Rc<RefCell<Vec<String>>>);

impl Observer<BoardState> for RenderLog {
    fn update(&mut self, subject: &BoardState) {
        self.0.borrow_mut().push(subject.to_string());
    }
}

#[test]
fn test_run_shows_the_opening_board_before_any_move() {
    let renders = Rc::new(RefCell::new(Vec::new()));
    let mut io = scripted("1\n4\n2\n5\n3\n");
    let mut game = Game::new();
    game.board_mut()
        .attach(Rc::new(RefCell::new(RenderLog(Rc::clone(&renders)))));
    game.run(&mut io).unwrap();

    let renders = renders.borrow();
    // one refresh before play plus one notification per successful move
    assert_eq!(renders.len(), 6);
    assert_eq!(
        renders[0],
        "1 | 2 | 3\n-----------\n4 | 5 | 6\n-----------\n7 | 8 | 9"
    );
    assert!(renders[5].starts_with("X | X | X"));
}

#[test]
fn test_truncated_input_surfaces_as_an_error() {
    let mut io = scripted("1\n4\n");
    let mut game = Game::new();
    let err = game.run(&mut io).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_get_validated_int_retries_until_acceptable() {
    let mut io = scripted("abc\n42\n7\n");
    let value = io
        .get_validated_int("Enter a number: ", |v| (1..=9).contains(&v))
        .unwrap();
    assert_eq!(value, 7);
    let (_, output) = io.into_parts();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("Enter a number: ").count(), 3);
}

#[test]
fn test_get_yes_or_no() {
    let mut io = scripted("maybe\nY\n");
    assert!(io.get_yes_or_no("Play again? [y/n]: ").unwrap());

    let mut io = scripted("N\n");
    assert!(!io.get_yes_or_no("Play again? [y/n]: ").unwrap());

    let mut io = scripted("x\nn\n");
    assert!(!io.get_yes_or_no("Play again? [y/n]: ").unwrap());
    let (_, output) = io.into_parts();
    assert!(String::from_utf8(output).unwrap().contains("Enter 'y' or 'n'."));
}
