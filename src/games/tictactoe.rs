//! # Tic-Tac-Toe
//!
//! Classic 3x3 game. X moves first; three in a row horizontally, vertically
//! or diagonally wins, and a full board without a line is a draw.

use crate::board::Position;
use crate::error::Result;
use crate::grid_match::{DrawRule, GridMatch, MatchRules, MoveRecord, MoveResult};
use crate::player::{GamePhase, Outcome, Seat};
use crate::GridGame;
use std::fmt;
use std::str::FromStr;

pub const SIZE: usize = 3;
pub const WIN_LENGTH: usize = 3;

pub const RULES: MatchRules = MatchRules {
    rows: SIZE,
    cols: SIZE,
    win_length: WIN_LENGTH,
    gravity: false,
    draw_rule: DrawRule::BoardFull,
};

/// A move as (row, column), 0-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeMove(pub usize, pub usize);

#[derive(Debug, Clone)]
pub struct TicTacToeState {
    game: GridMatch,
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeState {
    pub fn new() -> Self {
        Self {
            game: GridMatch::new(RULES),
        }
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_board(f, self.game.board(), ["X", "O"])
    }
}

impl GridGame for TicTacToeState {
    type Move = TicTacToeMove;

    fn id(&self) -> &'static str {
        "ticTacToe"
    }

    fn name(&self) -> &'static str {
        "Tic Tac Toe"
    }

    fn grid_match(&self) -> &GridMatch {
        &self.game
    }

    fn grid_match_mut(&mut self) -> &mut GridMatch {
        &mut self.game
    }

    fn make_move(&mut self, mv: &Self::Move) -> Result<MoveResult> {
        self.game.place(Position::new(mv.0, mv.1))
    }

    fn seat_name(&self, seat: Seat) -> &'static str {
        match seat {
            Seat::First => "X",
            Seat::Second => "O",
        }
    }

    fn status_message(&self) -> String {
        match (self.game.phase(), self.game.outcome()) {
            (GamePhase::Finished, Some(Outcome::Win(seat))) => {
                format!("🏆 Player {} wins!", self.seat_name(seat))
            }
            (GamePhase::Finished, _) => "🤝 It's a draw!".to_string(),
            _ => format!("Player {}'s turn", self.seat_name(self.game.current_seat())),
        }
    }

    fn cell_label(&self, pos: Position) -> String {
        let base = format!("Cell {}, {}", pos.row + 1, pos.col + 1);
        match self.game.board().get(pos) {
            Some(Some(seat)) => format!("{}: {}", base, self.seat_name(*seat)),
            _ => base,
        }
    }

    fn describe_move(&self, record: &MoveRecord) -> String {
        format!("{},{}", record.row + 1, record.col + 1)
    }
}

impl FromStr for TicTacToeMove {
    type Err = String;

    /// Parses `"row,col"` with 1-based coordinates, e.g. `"2,3"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (r, c) = s
            .split_once(',')
            .ok_or_else(|| "Expected format: row,col".to_string())?;
        let r = r.trim().parse::<usize>().map_err(|e| e.to_string())?;
        let c = c.trim().parse::<usize>().map_err(|e| e.to_string())?;
        if r == 0 || c == 0 {
            return Err("Rows and columns start at 1".to_string());
        }
        Ok(TicTacToeMove(r - 1, c - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArcadeError;

    fn playing() -> TicTacToeState {
        let mut game = TicTacToeState::new();
        game.start();
        game
    }

    #[test]
    fn test_new_game() {
        let game = TicTacToeState::new();
        assert_eq!(game.phase(), GamePhase::Waiting);
        assert_eq!(game.board().dimensions(), (3, 3));
        assert_eq!(game.current_seat(), Seat::First);
    }

    #[test]
    fn test_status_follows_turns() {
        let mut game = playing();
        assert_eq!(game.status_message(), "Player X's turn");
        game.make_move(&TicTacToeMove(1, 1)).unwrap();
        assert_eq!(game.status_message(), "Player O's turn");
        assert_eq!(game.cell_label(Position::new(1, 1)), "Cell 2, 2: X");
        assert_eq!(game.cell_label(Position::new(0, 0)), "Cell 1, 1");
    }

    #[test]
    fn test_win_condition_diagonal() {
        let mut game = playing();
        for mv in [(0, 0), (0, 1), (1, 1), (0, 2)] {
            game.make_move(&TicTacToeMove(mv.0, mv.1)).unwrap();
        }
        let result = game.make_move(&TicTacToeMove(2, 2)).unwrap();
        assert_eq!(result, MoveResult::Finished(Outcome::Win(Seat::First)));
        assert_eq!(game.status_message(), "🏆 Player X wins!");
        assert!(matches!(
            game.make_move(&TicTacToeMove(2, 0)),
            Err(ArcadeError::NotPlaying)
        ));
    }

    #[test]
    fn test_draw() {
        let mut game = playing();
        // X O X / X O O / O X X
        for mv in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
            game.make_move(&TicTacToeMove(mv.0, mv.1)).unwrap();
        }
        assert_eq!(game.grid_match().outcome(), Some(Outcome::Draw));
        assert_eq!(game.status_message(), "🤝 It's a draw!");
        assert_eq!(game.grid_match().score().draws, 1);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!("2,3".parse::<TicTacToeMove>().unwrap(), TicTacToeMove(1, 2));
        assert!("0,1".parse::<TicTacToeMove>().is_err());
        assert!("22".parse::<TicTacToeMove>().is_err());
    }

    #[test]
    fn test_display() {
        let mut game = playing();
        game.make_move(&TicTacToeMove(0, 0)).unwrap();
        assert_eq!(game.to_string(), "X . . \n. . . \n. . . \n");
    }
}
