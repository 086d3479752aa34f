//! # Game Implementations Module
//!
//! This module contains every game offered by the arcade.
//!
//! ## Supported Games
//! - **Tic-Tac-Toe**: 3x3 board, three in a row wins
//! - **Connect Four**: 6x7 board with gravity, four in a row wins
//! - **Five in a Row**: 15x15 board, five in a row wins, with coordinates
//! - **Language Cards**: alphabet flashcards for English, Hebrew and Russian
//!
//! The three grid games implement the `arcade::GridGame` trait on top of the
//! shared [`crate::grid_match::GridMatch`] engine. The flashcards have no board
//! and no winner, so they stand on their own.
//!
//! ## Adding New Games
//! 1. A move type with `FromStr`/`Display` where it helps input and logs
//! 2. A state type wrapping a `GridMatch` with the game's `MatchRules`
//! 3. A `GridGame` implementation naming the seats and the status lines
//! 4. A variant in `GameWrapper` and a card in the launcher

pub mod connect4;
pub mod five_in_row;
pub mod language_cards;
pub mod tictactoe;

use crate::board::{Cell, Grid};
use crate::player::Seat;
use std::fmt;

/// Writes the board one row per line using the given seat symbols.
pub(crate) fn fmt_board(
    f: &mut fmt::Formatter<'_>,
    board: &Grid<Cell>,
    symbols: [&str; 2],
) -> fmt::Result {
    for row in board.iter_rows() {
        for cell in row {
            let symbol = match cell {
                Some(Seat::First) => symbols[0],
                Some(Seat::Second) => symbols[1],
                None => ".",
            };
            write!(f, "{} ", symbol)?;
        }
        writeln!(f)?;
    }
    Ok(())
}
