//! Terminal arcade of classic grid games.
//!
//! The rules engine ([`grid_match`], [`board`]) is independent of the front end
//! ([`app`], [`tui`]), so games can be driven from tests or scripts as well as
//! from the terminal.

pub mod app;
pub mod board;
pub mod error;
pub mod game_wrapper;
pub mod games;
pub mod grid_match;
pub mod launcher;
pub mod player;
pub mod score;
pub mod tui;

pub use board::{Cell, Grid, Position};
pub use error::{ArcadeError, Result};
pub use game_wrapper::{GameWrapper, MoveWrapper};
pub use grid_match::{GridMatch, MatchRules, MoveRecord, MoveResult};
pub use player::{GamePhase, Outcome, Seat};

/// A two-player game played on a grid.
///
/// Implementors own a [`GridMatch`] and supply the game-specific parts: move
/// type, seat names and the text shown to the players. Turn order, undo and
/// reset come for free through the provided methods.
pub trait GridGame {
    /// The type of a move in the game.
    type Move: Clone + Eq + std::hash::Hash + std::fmt::Debug;

    /// Key used for score persistence, e.g. `"ticTacToe"`.
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    fn grid_match(&self) -> &GridMatch;
    fn grid_match_mut(&mut self) -> &mut GridMatch;

    /// Applies a move for the seat to move.
    fn make_move(&mut self, mv: &Self::Move) -> Result<MoveResult>;

    /// Display name of a seat (`"X"`, `"red"`, ...).
    fn seat_name(&self, seat: Seat) -> &'static str;
    /// One-line status for the current phase.
    fn status_message(&self) -> String;
    /// Label text for one cell, mentioning its occupant.
    fn cell_label(&self, pos: Position) -> String;
    /// Short notation for a history entry.
    fn describe_move(&self, record: &MoveRecord) -> String;

    fn start(&mut self) {
        self.grid_match_mut().start();
    }

    fn board(&self) -> &Grid<Cell> {
        self.grid_match().board()
    }

    fn phase(&self) -> GamePhase {
        self.grid_match().phase()
    }

    fn current_seat(&self) -> Seat {
        self.grid_match().current_seat()
    }

    fn move_count(&self) -> u32 {
        self.grid_match().move_count()
    }

    fn undo(&mut self) -> Result<MoveRecord> {
        self.grid_match_mut().undo()
    }

    fn reset(&mut self) {
        self.grid_match_mut().reset();
    }

    fn is_terminal(&self) -> bool {
        self.phase() == GamePhase::Finished
    }
}
