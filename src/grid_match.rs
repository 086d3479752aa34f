//! # Turn and Undo Bookkeeping
//!
//! `GridMatch` is the engine under every grid game: it owns the board, whose
//! turn it is, the move history used for undo, the move counter, the game
//! phase and the score tally. Games differ only in their [`MatchRules`].
//!
//! ## Move flow
//! 1. The move is validated (phase, bounds, occupancy, gravity).
//! 2. The cell is filled and a [`MoveRecord`] is pushed.
//! 3. A win finishes the game for the mover; otherwise a draw finishes it;
//!    otherwise the turn passes and the move counter advances.

use crate::board::{self, Cell, Grid, Position};
use crate::error::{ArcadeError, Result};
use crate::player::{GamePhase, Outcome, Seat};
use crate::score::ScoreTally;
use tracing::{debug, info, instrument};

/// When a board without a winner counts as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRule {
    /// Every cell is occupied.
    BoardFull,
    /// Every cell of the top row is occupied. Under gravity this means the
    /// board is full.
    TopRowFull,
}

/// Board geometry and rule switches for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRules {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub gravity: bool,
    pub draw_rule: DrawRule,
}

/// One entry of the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub row: usize,
    pub col: usize,
    pub seat: Seat,
    /// Value of the move counter when the move was made.
    pub move_number: u32,
}

impl MoveRecord {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The game goes on with the other seat to move.
    Continue,
    Finished(Outcome),
}

/// Copy of the observable match state, for debugging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Grid<Cell>,
    pub current: Seat,
    pub move_count: u32,
    pub phase: GamePhase,
    pub score: ScoreTally,
}

#[derive(Debug, Clone)]
pub struct GridMatch {
    rules: MatchRules,
    board: Grid<Cell>,
    current: Seat,
    phase: GamePhase,
    history: Vec<MoveRecord>,
    move_count: u32,
    outcome: Option<Outcome>,
    score: ScoreTally,
}

impl GridMatch {
    /// Creates a match in the `Waiting` phase with an empty board.
    pub fn new(rules: MatchRules) -> Self {
        Self {
            rules,
            board: Grid::new(rules.rows, rules.cols, None),
            current: Seat::First,
            phase: GamePhase::Waiting,
            history: Vec::new(),
            move_count: 1,
            outcome: None,
            score: ScoreTally::default(),
        }
    }

    /// Moves a waiting match into play. Has no effect once started.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Waiting {
            self.phase = GamePhase::Playing;
        }
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    pub fn board(&self) -> &Grid<Cell> {
        &self.board
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn score(&self) -> ScoreTally {
        self.score
    }

    pub fn set_score(&mut self, score: ScoreTally) {
        self.score = score;
    }

    pub fn can_undo(&self) -> bool {
        self.phase == GamePhase::Playing && !self.history.is_empty()
    }

    /// Lowest empty row of `col`, or `None` when the column is full or out
    /// of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..self.rules.rows)
            .rev()
            .find(|&row| self.board.get(Position::new(row, col)) == Some(&None))
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Places the current seat's token at `pos`.
    ///
    /// With gravity the token falls to the lowest empty row of `pos.col`,
    /// so any cell of a column selects that column.
    #[instrument(level = "debug", skip(self))]
    pub fn place(&mut self, pos: Position) -> Result<MoveResult> {
        if self.rules.gravity {
            return self.drop_in(pos.col);
        }
        self.ensure_playing()?;
        match self.board.get(pos) {
            None => Err(self.out_of_bounds(pos)),
            Some(Some(_)) => Err(ArcadeError::CellOccupied {
                row: pos.row,
                col: pos.col,
            }),
            Some(None) => self.apply(pos),
        }
    }

    /// Drops the current seat's token into `col`. A full column is rejected
    /// and leaves the match untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn drop_in(&mut self, col: usize) -> Result<MoveResult> {
        self.ensure_playing()?;
        if col >= self.rules.cols {
            return Err(self.out_of_bounds(Position::new(0, col)));
        }
        let row = self
            .lowest_empty_row(col)
            .ok_or(ArcadeError::ColumnFull(col))?;
        self.apply(Position::new(row, col))
    }

    /// Takes back the last move, restoring its cell, the seat to move and the
    /// move counter. Not allowed once the game is finished.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> Result<MoveRecord> {
        self.ensure_playing()?;
        let record = self.history.pop().ok_or(ArcadeError::NothingToUndo)?;
        self.board.set(record.position(), None)?;
        self.current = record.seat;
        self.move_count = record.move_number;
        debug!(row = record.row, col = record.col, "undid move");
        Ok(record)
    }

    /// Clears the board for a new game. The score tally is kept.
    pub fn reset(&mut self) {
        self.board = Grid::new(self.rules.rows, self.rules.cols, None);
        self.current = Seat::First;
        self.history.clear();
        self.move_count = 1;
        self.outcome = None;
        self.phase = GamePhase::Playing;
        debug!("match reset");
    }

    /// Cells of the winning line, empty unless the game was won.
    pub fn winning_cells(&self) -> Vec<Position> {
        match self.outcome {
            Some(Outcome::Win(seat)) => {
                board::winning_line(&self.board, seat, self.rules.win_length).unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current: self.current,
            move_count: self.move_count,
            phase: self.phase,
            score: self.score,
        }
    }

    fn ensure_playing(&self) -> Result<()> {
        if self.phase == GamePhase::Playing {
            Ok(())
        } else {
            Err(ArcadeError::NotPlaying)
        }
    }

    fn out_of_bounds(&self, pos: Position) -> ArcadeError {
        ArcadeError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows: self.rules.rows,
            cols: self.rules.cols,
        }
    }

    fn apply(&mut self, pos: Position) -> Result<MoveResult> {
        self.board.set(pos, Some(self.current))?;
        self.history.push(MoveRecord {
            row: pos.row,
            col: pos.col,
            seat: self.current,
            move_number: self.move_count,
        });

        if let Some(seat) = board::winner(&self.board, self.rules.win_length) {
            return Ok(self.finish(Outcome::Win(seat)));
        }
        if self.draw_reached() {
            return Ok(self.finish(Outcome::Draw));
        }
        self.current = self.current.opponent();
        self.move_count += 1;
        Ok(MoveResult::Continue)
    }

    fn draw_reached(&self) -> bool {
        match self.rules.draw_rule {
            DrawRule::BoardFull => self.board.is_full(&None),
            DrawRule::TopRowFull => self.board.row(0).iter().all(Option::is_some),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> MoveResult {
        self.phase = GamePhase::Finished;
        self.outcome = Some(outcome);
        self.score.record(outcome);
        info!(?outcome, moves = self.history.len(), "game finished");
        MoveResult::Finished(outcome)
    }
}
