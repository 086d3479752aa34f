//! # Five in a Row
//!
//! Gomoku-style game on a 15x15 board. X moves first and five consecutive
//! stones in any direction win. Cells are named like a go board: columns
//! `A`-`O` from the left, rows `1`-`15` from the top (`H8` is the centre).

use crate::board::Position;
use crate::error::Result;
use crate::grid_match::{DrawRule, GridMatch, MatchRules, MoveRecord, MoveResult};
use crate::player::{GamePhase, Outcome, Seat};
use crate::GridGame;
use std::fmt;
use std::str::FromStr;

pub const SIZE: usize = 15;
pub const WIN_LENGTH: usize = 5;

pub const RULES: MatchRules = MatchRules {
    rows: SIZE,
    cols: SIZE,
    win_length: WIN_LENGTH,
    gravity: false,
    draw_rule: DrawRule::BoardFull,
};

/// A stone placement as (row, column), 0-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FiveInRowMove(pub usize, pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiveInRowOptions {
    pub show_coordinates: bool,
    pub highlight_last_move: bool,
}

impl Default for FiveInRowOptions {
    fn default() -> Self {
        Self {
            show_coordinates: true,
            highlight_last_move: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FiveInRowState {
    game: GridMatch,
    pub options: FiveInRowOptions,
}

impl Default for FiveInRowState {
    fn default() -> Self {
        Self::new()
    }
}

impl FiveInRowState {
    pub fn new() -> Self {
        Self {
            game: GridMatch::new(RULES),
            options: FiveInRowOptions::default(),
        }
    }

    pub fn toggle_coordinates(&mut self) {
        self.options.show_coordinates = !self.options.show_coordinates;
    }

    pub fn toggle_last_move_highlight(&mut self) {
        self.options.highlight_last_move = !self.options.highlight_last_move;
    }

    /// The cell to highlight as the latest stone, if highlighting is on.
    pub fn highlighted_move(&self) -> Option<Position> {
        if !self.options.highlight_last_move {
            return None;
        }
        self.game.last_move().map(MoveRecord::position)
    }
}

/// Column letter for a 0-based column index (`0` -> `A`).
pub fn column_label(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Board coordinate such as `H8` for a 0-based position.
pub fn coordinate_label(pos: Position) -> String {
    format!("{}{}", column_label(pos.col), pos.row + 1)
}

impl fmt::Display for FiveInRowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_board(f, self.game.board(), ["X", "O"])
    }
}

impl GridGame for FiveInRowState {
    type Move = FiveInRowMove;

    fn id(&self) -> &'static str {
        "fiveInRow"
    }

    fn name(&self) -> &'static str {
        "Five in Row"
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
            (GamePhase::Finished, Some(Outcome::Win(seat))) => format!(
                "🏆 Player {} wins! {} moves played.",
                self.seat_name(seat),
                self.game.history().len()
            ),
            (GamePhase::Finished, _) => "🤝 Game ended in a draw!".to_string(),
            _ => format!(
                "Player {}'s turn - Get 5 in a row!",
                self.seat_name(self.game.current_seat())
            ),
        }
    }

    fn cell_label(&self, pos: Position) -> String {
        let base = format!("Cell {}", coordinate_label(pos));
        match self.game.board().get(pos) {
            Some(Some(seat)) => format!("{}: {}", base, self.seat_name(*seat)),
            _ => base,
        }
    }

    fn describe_move(&self, record: &MoveRecord) -> String {
        coordinate_label(record.position())
    }
}

impl FromStr for FiveInRowMove {
    type Err = String;

    /// Accepts a board coordinate (`"H8"`, case-insensitive) or a 1-based
    /// `"row,col"` pair as tic-tac-toe does.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((r, c)) = s.split_once(',') {
            let r = r.trim().parse::<usize>().map_err(|e| e.to_string())?;
            let c = c.trim().parse::<usize>().map_err(|e| e.to_string())?;
            if r == 0 || c == 0 {
                return Err("Rows and columns start at 1".to_string());
            }
            return Ok(FiveInRowMove(r - 1, c - 1));
        }

        let mut chars = s.chars();
        let letter = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| "Expected a coordinate like H8".to_string())?;
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        let row = chars.as_str().parse::<usize>().map_err(|e| e.to_string())?;
        if col >= SIZE || row == 0 || row > SIZE {
            return Err(format!("{} is off the board", s));
        }
        Ok(FiveInRowMove(row - 1, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArcadeError;

    fn playing() -> FiveInRowState {
        let mut game = FiveInRowState::new();
        game.start();
        game
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(coordinate_label(Position::new(7, 7)), "H8");
        assert_eq!(coordinate_label(Position::new(14, 14)), "O15");
        assert_eq!(column_label(0), 'A');
    }

    #[test]
    fn test_parse_move() {
        assert_eq!("h8".parse::<FiveInRowMove>().unwrap(), FiveInRowMove(7, 7));
        assert_eq!("A15".parse::<FiveInRowMove>().unwrap(), FiveInRowMove(14, 0));
        assert_eq!("3, 4".parse::<FiveInRowMove>().unwrap(), FiveInRowMove(2, 3));
        assert_eq!("8,8".parse::<FiveInRowMove>(), "H8".parse::<FiveInRowMove>());
        assert!("0,4".parse::<FiveInRowMove>().is_err());
        assert!("P1".parse::<FiveInRowMove>().is_err());
        assert!("A0".parse::<FiveInRowMove>().is_err());
        assert!("8H".parse::<FiveInRowMove>().is_err());
    }

    #[test]
    fn test_vertical_five_wins() {
        let mut game = playing();
        for r in 0..4 {
            game.make_move(&FiveInRowMove(r, 0)).unwrap();
            game.make_move(&FiveInRowMove(r, 5)).unwrap();
        }
        assert_eq!(game.status_message(), "Player X's turn - Get 5 in a row!");
        let result = game.make_move(&FiveInRowMove(4, 0)).unwrap();
        assert_eq!(result, MoveResult::Finished(Outcome::Win(Seat::First)));
        assert_eq!(game.status_message(), "🏆 Player X wins! 9 moves played.");
    }

    #[test]
    fn test_four_is_not_enough() {
        let mut game = playing();
        for c in 0..4 {
            game.make_move(&FiveInRowMove(7, c)).unwrap();
            game.make_move(&FiveInRowMove(0, c)).unwrap();
        }
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_last_move_highlight() {
        let mut game = playing();
        assert_eq!(game.highlighted_move(), None);
        game.make_move(&FiveInRowMove(3, 3)).unwrap();
        assert_eq!(game.highlighted_move(), Some(Position::new(3, 3)));
        game.toggle_last_move_highlight();
        assert_eq!(game.highlighted_move(), None);
    }

    #[test]
    fn test_undo_then_replay() {
        let mut game = playing();
        game.make_move(&FiveInRowMove(7, 7)).unwrap();
        game.make_move(&FiveInRowMove(7, 8)).unwrap();
        let undone = game.undo().unwrap();
        assert_eq!(coordinate_label(undone.position()), "I8");
        assert_eq!(game.current_seat(), Seat::Second);
        assert_eq!(game.move_count(), 2);
        assert!(matches!(
            game.make_move(&FiveInRowMove(7, 7)),
            Err(ArcadeError::CellOccupied { .. })
        ));
        assert_eq!(game.cell_label(Position::new(7, 7)), "Cell H8: X");
    }
}
