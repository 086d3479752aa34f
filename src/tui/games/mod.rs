//! Per-game cell glyphs and colours.

pub mod connect4;
pub mod five_in_row;
pub mod tictactoe;
