//! Seats and game phases shared by every grid game.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players at the board.
///
/// Games name the seats themselves: tic-tac-toe and five in a row use `X`/`O`,
/// connect four uses `Red`/`Yellow`. `First` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats in turn order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::First => write!(f, "first"),
            Seat::Second => write!(f, "second"),
        }
    }
}

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Constructed but not started yet.
    #[default]
    Waiting,
    Playing,
    Finished,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Seat),
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_alternates() {
        assert_eq!(Seat::First.opponent(), Seat::Second);
        assert_eq!(Seat::Second.opponent().opponent(), Seat::Second);
    }

    #[test]
    fn games_start_waiting() {
        assert_eq!(GamePhase::default(), GamePhase::Waiting);
    }
}
