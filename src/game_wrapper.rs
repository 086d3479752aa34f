//! # Game Wrapper Module
//!
//! Enum dispatch over the grid games so the app and the terminal front end can
//! hold "whichever game is open" without trait objects. `GridGame` has an
//! associated move type, so the wrapper pairs each game variant with a
//! matching [`MoveWrapper`] variant and implements `GridGame` itself.

use crate::board::Position;
use crate::error::{ArcadeError, Result};
use crate::games::connect4::{Connect4Move, Connect4State};
use crate::games::five_in_row::{self, FiveInRowMove, FiveInRowState};
use crate::games::tictactoe::{TicTacToeMove, TicTacToeState};
use crate::grid_match::{GridMatch, MoveRecord, MoveResult};
use crate::player::Seat;
use crate::GridGame;
use std::fmt;

/// Wrapper enum for all grid games.
#[derive(Debug, Clone)]
pub enum GameWrapper {
    TicTacToe(TicTacToeState),
    /// 6x7 board with gravity; moves name a column only.
    Connect4(Connect4State),
    FiveInRow(FiveInRowState),
}

/// Wrapper enum for the matching move types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveWrapper {
    TicTacToe(TicTacToeMove),
    Connect4(Connect4Move),
    FiveInRow(FiveInRowMove),
}

impl fmt::Display for MoveWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveWrapper::TicTacToe(m) => write!(f, "T({},{})", m.0 + 1, m.1 + 1),
            MoveWrapper::Connect4(m) => write!(f, "C4({})", m.0 + 1),
            MoveWrapper::FiveInRow(m) => write!(
                f,
                "F({})",
                five_in_row::coordinate_label(Position::new(m.0, m.1))
            ),
        }
    }
}

impl fmt::Display for GameWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameWrapper::TicTacToe(g) => write!(f, "{}", g),
            GameWrapper::Connect4(g) => write!(f, "{}", g),
            GameWrapper::FiveInRow(g) => write!(f, "{}", g),
        }
    }
}

impl GameWrapper {
    /// Opens a fresh, started game by name.
    ///
    /// Accepts the score ids (`ticTacToe`, `connectFour`, `fiveInRow`) and the
    /// usual spellings (`tic-tac-toe`, `connect4`, `gomoku`, ...), ignoring
    /// case and separators.
    pub fn from_name(name: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let mut game = match key.as_str() {
            "tictactoe" | "ttt" => GameWrapper::TicTacToe(TicTacToeState::new()),
            "connectfour" | "connect4" | "c4" => GameWrapper::Connect4(Connect4State::new()),
            "fiveinrow" | "fiveinarow" | "gomoku" => GameWrapper::FiveInRow(FiveInRowState::new()),
            _ => return Err(ArcadeError::UnknownGame(name.to_string())),
        };
        game.start();
        Ok(game)
    }

    /// The move that selecting `pos` on the board stands for. For connect
    /// four any cell selects its column.
    pub fn move_at(&self, pos: Position) -> MoveWrapper {
        match self {
            GameWrapper::TicTacToe(_) => MoveWrapper::TicTacToe(TicTacToeMove(pos.row, pos.col)),
            GameWrapper::Connect4(_) => MoveWrapper::Connect4(Connect4Move(pos.col)),
            GameWrapper::FiveInRow(_) => MoveWrapper::FiveInRow(FiveInRowMove(pos.row, pos.col)),
        }
    }

    /// Parses typed move text in the open game's notation.
    pub fn parse_move(&self, text: &str) -> std::result::Result<MoveWrapper, String> {
        Ok(match self {
            GameWrapper::TicTacToe(_) => MoveWrapper::TicTacToe(text.parse()?),
            GameWrapper::Connect4(_) => MoveWrapper::Connect4(text.parse()?),
            GameWrapper::FiveInRow(_) => MoveWrapper::FiveInRow(text.parse()?),
        })
    }
}

macro_rules! impl_game_dispatch {
    ($($variant:ident),*) => {
        impl GridGame for GameWrapper {
            type Move = MoveWrapper;

            fn id(&self) -> &'static str {
                match self {
                    $(GameWrapper::$variant(g) => g.id(),)*
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(GameWrapper::$variant(g) => g.name(),)*
                }
            }

            fn grid_match(&self) -> &GridMatch {
                match self {
                    $(GameWrapper::$variant(g) => g.grid_match(),)*
                }
            }

            fn grid_match_mut(&mut self) -> &mut GridMatch {
                match self {
                    $(GameWrapper::$variant(g) => g.grid_match_mut(),)*
                }
            }

            fn make_move(&mut self, mv: &Self::Move) -> Result<MoveResult> {
                match (self, mv) {
                    $((GameWrapper::$variant(g), MoveWrapper::$variant(m)) => g.make_move(m),)*
                    _ => Err(ArcadeError::MismatchedMove),
                }
            }

            fn seat_name(&self, seat: Seat) -> &'static str {
                match self {
                    $(GameWrapper::$variant(g) => g.seat_name(seat),)*
                }
            }

            fn status_message(&self) -> String {
                match self {
                    $(GameWrapper::$variant(g) => g.status_message(),)*
                }
            }

            fn cell_label(&self, pos: Position) -> String {
                match self {
                    $(GameWrapper::$variant(g) => g.cell_label(pos),)*
                }
            }

            fn describe_move(&self, record: &MoveRecord) -> String {
                match self {
                    $(GameWrapper::$variant(g) => g.describe_move(record),)*
                }
            }
        }
    };
}

impl_game_dispatch!(TicTacToe, Connect4, FiveInRow);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::GamePhase;

    #[test]
    fn test_from_name() {
        let game = GameWrapper::from_name("Connect-Four").unwrap();
        assert_eq!(game.id(), "connectFour");
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(GameWrapper::from_name("gomoku").unwrap().id(), "fiveInRow");
        assert_eq!(GameWrapper::from_name("ticTacToe").unwrap().name(), "Tic Tac Toe");
        assert!(matches!(
            GameWrapper::from_name("chess"),
            Err(ArcadeError::UnknownGame(name)) if name == "chess"
        ));
    }

    #[test]
    fn test_dispatch_and_mismatch() {
        let mut game = GameWrapper::from_name("tictactoe").unwrap();
        let mv = game.move_at(Position::new(1, 1));
        assert_eq!(game.make_move(&mv).unwrap(), MoveResult::Continue);
        assert_eq!(game.status_message(), "Player O's turn");
        assert!(matches!(
            game.make_move(&MoveWrapper::Connect4(Connect4Move(0))),
            Err(ArcadeError::MismatchedMove)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(MoveWrapper::FiveInRow(FiveInRowMove(7, 7)).to_string(), "F(H8)");
        assert_eq!(MoveWrapper::Connect4(Connect4Move(3)).to_string(), "C4(4)");
        let game = GameWrapper::from_name("ttt").unwrap();
        assert_eq!(game.to_string(), ". . . \n. . . \n. . . \n");
    }

    #[test]
    fn test_parse_move() {
        let game = GameWrapper::from_name("connect4").unwrap();
        assert_eq!(game.parse_move("7"), Ok(MoveWrapper::Connect4(Connect4Move(6))));
        assert!(game.parse_move("9").is_err());
    }
}
