//! # Connect Four Game Implementation
//!
//! Players take turns dropping coins into columns, trying to get 4 coins
//! in a row (horizontally, vertically, or diagonally).
//!
//! ## Rules
//! - Red moves first, then players alternate
//! - Coins fall to the lowest available spot in the column due to gravity
//! - Dropping into a full column is refused and the turn does not pass
//! - First player to get 4 coins in a row wins
//! - Game is a draw if the board fills up with no winner

use crate::board::Position;
use crate::error::Result;
use crate::grid_match::{DrawRule, GridMatch, MatchRules, MoveRecord, MoveResult};
use crate::player::{GamePhase, Outcome, Seat};
use crate::GridGame;
use std::fmt;
use std::str::FromStr;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

pub const RULES: MatchRules = MatchRules {
    rows: ROWS,
    cols: COLS,
    win_length: WIN_LENGTH,
    gravity: true,
    draw_rule: DrawRule::TopRowFull,
};

/// Represents a move in Connect Four
///
/// Contains the column number where a player wants to drop their coin.
/// Column numbers are 0-based indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Connect4Move(pub usize);

/// Display toggles for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connect4Options {
    pub show_column_numbers: bool,
    pub animate_drops: bool,
}

impl Default for Connect4Options {
    fn default() -> Self {
        Self {
            show_column_numbers: true,
            animate_drops: true,
        }
    }
}

/// Represents the complete state of a Connect Four game
#[derive(Debug, Clone)]
pub struct Connect4State {
    game: GridMatch,
    pub options: Connect4Options,
}

impl Default for Connect4State {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Connect4State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_board(f, self.game.board(), ["R", "Y"])
    }
}

impl Connect4State {
    /// Creates a new game on the standard 6x7 board
    pub fn new() -> Self {
        Self {
            game: GridMatch::new(RULES),
            options: Connect4Options::default(),
        }
    }

    /// Drops a coin for the current player into `col`
    pub fn drop_in(&mut self, col: usize) -> Result<MoveResult> {
        self.game.drop_in(col)
    }

    /// Checks if a coin can still be dropped into the column
    ///
    /// A column is available if it is within bounds and its top cell is empty.
    pub fn is_column_available(&self, col: usize) -> bool {
        col < COLS && !self.game.is_column_full(col)
    }

    /// Availability of every column, left to right
    pub fn column_availability(&self) -> Vec<bool> {
        (0..COLS).map(|c| self.is_column_available(c)).collect()
    }

    /// Accessible label for the drop control above `col`
    pub fn drop_label(&self, col: usize) -> String {
        format!("Drop coin in column {}", col + 1)
    }

    pub fn toggle_column_numbers(&mut self) {
        self.options.show_column_numbers = !self.options.show_column_numbers;
    }

    pub fn toggle_animations(&mut self) {
        self.options.animate_drops = !self.options.animate_drops;
    }
}

/// "red" -> "Red"
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl GridGame for Connect4State {
    type Move = Connect4Move;

    fn id(&self) -> &'static str {
        "connectFour"
    }

    fn name(&self) -> &'static str {
        "Connect Four"
    }

    fn grid_match(&self) -> &GridMatch {
        &self.game
    }

    fn grid_match_mut(&mut self) -> &mut GridMatch {
        &mut self.game
    }

    fn make_move(&mut self, mv: &Self::Move) -> Result<MoveResult> {
        self.game.drop_in(mv.0)
    }

    fn seat_name(&self, seat: Seat) -> &'static str {
        match seat {
            Seat::First => "red",
            Seat::Second => "yellow",
        }
    }

    fn status_message(&self) -> String {
        match (self.game.phase(), self.game.outcome()) {
            (GamePhase::Finished, Some(Outcome::Win(seat))) => format!(
                "🏆 {} wins! {} moves played.",
                capitalize(self.seat_name(seat)),
                self.game.history().len()
            ),
            (GamePhase::Finished, _) => "🤝 Game ended in a draw!".to_string(),
            _ => format!(
                "{}'s turn - Drop a coin!",
                capitalize(self.seat_name(self.game.current_seat()))
            ),
        }
    }

    fn cell_label(&self, pos: Position) -> String {
        let base = format!("Row {}, Column {}", pos.row + 1, pos.col + 1);
        match self.game.board().get(pos) {
            Some(Some(seat)) => format!("{}: {} coin", base, self.seat_name(*seat)),
            _ => base,
        }
    }

    fn describe_move(&self, record: &MoveRecord) -> String {
        format!("column {}", record.col + 1)
    }
}

impl FromStr for Connect4Move {
    type Err = String;

    /// Creates a Connect4Move from a 1-based column number, as typed on the
    /// keyboard (e.g. `"4"` is the middle column).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let c = s.trim().parse::<usize>().map_err(|e| e.to_string())?;
        if c == 0 || c > COLS {
            return Err(format!("Column must be between 1 and {}", COLS));
        }
        Ok(Connect4Move(c - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArcadeError;

    fn playing() -> Connect4State {
        let mut game = Connect4State::new();
        game.start();
        game
    }

    #[test]
    fn test_new_game() {
        let game = Connect4State::new();
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(game.board().dimensions(), (6, 7));
        assert_eq!(game.column_availability(), vec![true; 7]);
        assert!(game.options.animate_drops);
    }

    #[test]
    fn test_make_move() {
        let mut game = playing();
        game.make_move(&Connect4Move(3)).unwrap();
        assert_eq!(game.board().get(Position::new(5, 3)), Some(&Some(Seat::First)));
        assert_eq!(game.current_seat(), Seat::Second);

        game.make_move(&Connect4Move(3)).unwrap();
        assert_eq!(game.board().get(Position::new(4, 3)), Some(&Some(Seat::Second)));
        assert_eq!(game.status_message(), "Red's turn - Drop a coin!");
    }

    #[test]
    fn test_full_column_is_rejected() {
        let mut game = playing();
        for _ in 0..ROWS {
            game.drop_in(0).unwrap();
        }
        assert!(!game.is_column_available(0));
        let before = game.grid_match().snapshot();
        assert!(matches!(game.drop_in(0), Err(ArcadeError::ColumnFull(0))));
        assert_eq!(game.grid_match().snapshot(), before);
    }

    #[test]
    fn test_win_condition_horizontal() {
        let mut game = playing();
        for col in [0, 0, 1, 1, 2, 2] {
            game.drop_in(col).unwrap();
        }
        let result = game.drop_in(3).unwrap();
        assert_eq!(result, MoveResult::Finished(Outcome::Win(Seat::First)));
        assert_eq!(game.status_message(), "🏆 Red wins! 7 moves played.");
    }

    #[test]
    fn test_win_condition_diagonal() {
        let mut game = playing();
        // Red builds / from (5,0) to (2,3)
        for col in [0, 1, 1, 2, 2, 3, 2, 3, 3, 0] {
            assert_eq!(game.drop_in(col).unwrap(), MoveResult::Continue);
        }
        let result = game.drop_in(3).unwrap();
        assert_eq!(result, MoveResult::Finished(Outcome::Win(Seat::First)));
        assert_eq!(game.grid_match().winning_cells().len(), 4);
    }

    #[test]
    fn test_undo_restores_turn_and_counter() {
        let mut game = playing();
        game.drop_in(2).unwrap();
        game.drop_in(2).unwrap();
        assert_eq!(game.move_count(), 3);
        game.undo().unwrap();
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.current_seat(), Seat::Second);
        assert_eq!(game.board().get(Position::new(4, 2)), Some(&None));
    }

    #[test]
    fn test_labels() {
        let mut game = playing();
        game.drop_in(0).unwrap();
        assert_eq!(game.cell_label(Position::new(5, 0)), "Row 6, Column 1: red coin");
        assert_eq!(game.drop_label(6), "Drop coin in column 7");
    }

    #[test]
    fn test_parse_move() {
        assert_eq!("4".parse::<Connect4Move>().unwrap(), Connect4Move(3));
        assert!("0".parse::<Connect4Move>().is_err());
        assert!("8".parse::<Connect4Move>().is_err());
    }
}
