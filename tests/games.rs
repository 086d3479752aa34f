//! End-to-end checks of the three grid games through the public API.

use arcade::board::{self, Grid, Position};
use arcade::games::connect4::{Connect4Move, Connect4State, COLS, ROWS};
use arcade::games::five_in_row::{FiveInRowMove, FiveInRowState};
use arcade::games::tictactoe::{TicTacToeMove, TicTacToeState};
use arcade::score::ScoreStore;
use arcade::{ArcadeError, GamePhase, GameWrapper, GridGame, MoveResult, Outcome, Seat};

const X: Option<Seat> = Some(Seat::First);
const O: Option<Seat> = Some(Seat::Second);

#[test]
fn top_row_of_x_wins() {
    let grid = Grid::from_rows(vec![vec![X, X, X], vec![O, O, None], vec![None, None, None]]).unwrap();
    assert_eq!(board::winner(&grid, 3), Some(Seat::First));
    assert!(!board::is_draw(&grid, 3));
}

#[test]
fn connect_four_full_column_is_rejected() {
    let mut game = Connect4State::new();
    game.start();
    for _ in 0..ROWS {
        game.make_move(&Connect4Move(0)).unwrap();
    }
    assert_eq!(game.board().get(Position::new(0, 0)), Some(&Some(Seat::Second)));
    let before = game.grid_match().snapshot();
    assert!(matches!(
        game.make_move(&Connect4Move(0)),
        Err(ArcadeError::ColumnFull(0))
    ));
    assert_eq!(game.grid_match().snapshot(), before);
    assert_eq!(game.status_message(), "Red's turn - Drop a coin!");
}

#[test]
fn connect_four_full_board_is_a_draw() {
    let mut game = Connect4State::new();
    game.start();
    // Columns are filled in pairs with the colours swapping halfway up, then
    // column 6 last.
    let order = [0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4,
        5, 4, 5, 5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6];
    let mut last = MoveResult::Continue;
    for col in order {
        last = game.make_move(&Connect4Move(col)).unwrap();
    }
    assert_eq!(last, MoveResult::Finished(Outcome::Draw));
    assert_eq!(game.status_message(), "🤝 Game ended in a draw!");
    assert_eq!(game.column_availability(), vec![false; COLS]);
}

#[test]
fn tic_tac_toe_undo_then_different_move() {
    let mut game = TicTacToeState::new();
    game.start();
    game.make_move(&TicTacToeMove(0, 0)).unwrap();
    let before = game.grid_match().snapshot();
    game.make_move(&TicTacToeMove(1, 1)).unwrap();
    game.undo().unwrap();
    assert_eq!(game.grid_match().snapshot(), before);
    game.make_move(&TicTacToeMove(2, 2)).unwrap();
    assert_eq!(game.current_seat(), Seat::First);
    assert_eq!(game.move_count(), 3);
}

#[test]
fn finished_game_refuses_moves_and_undo_until_reset() {
    let mut game = FiveInRowState::new();
    game.start();
    for c in 0..4 {
        game.make_move(&FiveInRowMove(0, c)).unwrap();
        game.make_move(&FiveInRowMove(1, c)).unwrap();
    }
    game.make_move(&FiveInRowMove(0, 4)).unwrap();
    assert!(game.is_terminal());
    assert!(matches!(game.undo(), Err(ArcadeError::NotPlaying)));
    assert!(matches!(
        game.make_move(&FiveInRowMove(5, 5)),
        Err(ArcadeError::NotPlaying)
    ));

    game.reset();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.grid_match().score().first, 1);
    assert!(game.grid_match().history().is_empty());
}

#[test]
fn scores_survive_a_restart() {
    let path = std::env::temp_dir().join(format!("grid-arcade-it-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut store = ScoreStore::load(&path).unwrap();
    let mut game = GameWrapper::from_name("ticTacToe").unwrap();
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        let mv = game.move_at(Position::new(r, c));
        game.make_move(&mv).unwrap();
    }
    store.put(game.id(), game.grid_match().score()).unwrap();

    let reloaded = ScoreStore::load(&path).unwrap();
    assert_eq!(reloaded.get("ticTacToe").first, 1);
    assert_eq!(reloaded.get("connectFour").games_played(), 0);
    std::fs::remove_file(&path).unwrap();
}
