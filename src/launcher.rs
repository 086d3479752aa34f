//! Home screen catalogue.
//!
//! One card per game, a focused card that moves with wrap-around, and a
//! per-session count of how often each game was opened.

use std::collections::BTreeMap;
use tracing::info;

/// What a launcher card opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    TicTacToe,
    ConnectFour,
    FiveInRow,
    LanguageCards,
}

impl GameKind {
    /// Name accepted by `GameWrapper::from_name`, `None` for the flashcards.
    pub fn grid_game_name(self) -> Option<&'static str> {
        match self {
            GameKind::TicTacToe => Some("ticTacToe"),
            GameKind::ConnectFour => Some("connectFour"),
            GameKind::FiveInRow => Some("fiveInRow"),
            GameKind::LanguageCards => None,
        }
    }
}

/// Accent colour of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Primary,
    Secondary,
    Accent,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub kind: GameKind,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: CardColor,
}

pub fn default_cards() -> Vec<GameCard> {
    vec![
        GameCard {
            kind: GameKind::TicTacToe,
            title: "Tic Tac Toe",
            description: "Get three in a row on a 3x3 board.",
            icon: "❌",
            color: CardColor::Primary,
        },
        GameCard {
            kind: GameKind::ConnectFour,
            title: "Connect Four",
            description: "Drop coins and connect four before your opponent.",
            icon: "🔴",
            color: CardColor::Secondary,
        },
        GameCard {
            kind: GameKind::FiveInRow,
            title: "Five in Row",
            description: "Place stones on a 15x15 board and line up five.",
            icon: "⚫",
            color: CardColor::Accent,
        },
        GameCard {
            kind: GameKind::LanguageCards,
            title: "Language Cards",
            description: "Learn the English, Hebrew and Russian alphabets.",
            icon: "🔤",
            color: CardColor::Warning,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct Launcher {
    cards: Vec<GameCard>,
    focus: usize,
    selections: BTreeMap<&'static str, u32>,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(default_cards())
    }
}

impl Launcher {
    pub fn new(cards: Vec<GameCard>) -> Self {
        Self {
            cards,
            focus: 0,
            selections: BTreeMap::new(),
        }
    }

    pub fn cards(&self) -> &[GameCard] {
        &self.cards
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&GameCard> {
        self.cards.get(self.focus)
    }

    /// Moves the focus by `delta` cards, wrapping around at either end.
    pub fn move_focus(&mut self, delta: isize) {
        let n = self.cards.len() as isize;
        if n == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(n) as usize;
    }

    /// Opens the card at `index` and records the selection.
    pub fn select(&mut self, index: usize) -> Option<GameKind> {
        let card = self.cards.get(index)?;
        self.focus = index;
        let count = self.selections.entry(card.title).or_insert(0);
        *count += 1;
        info!(title = card.title, card = index + 1, count = *count, "game selected");
        Some(card.kind)
    }

    /// How often the card titled `title` was opened this session.
    pub fn selection_count(&self, title: &str) -> u32 {
        self.selections.get(title).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        let mut launcher = Launcher::default();
        assert_eq!(launcher.cards().len(), 4);
        launcher.move_focus(-1);
        assert_eq!(launcher.focus(), 3);
        launcher.move_focus(1);
        assert_eq!(launcher.focus(), 0);
        launcher.move_focus(6);
        assert_eq!(launcher.focus(), 2);
    }

    #[test]
    fn select_counts_and_returns_kind() {
        let mut launcher = Launcher::default();
        assert_eq!(launcher.select(1), Some(GameKind::ConnectFour));
        assert_eq!(launcher.select(1), Some(GameKind::ConnectFour));
        assert_eq!(launcher.selection_count("Connect Four"), 2);
        assert_eq!(launcher.focus(), 1);
        assert_eq!(launcher.select(9), None);
    }

    #[test]
    fn grid_game_names() {
        assert_eq!(GameKind::FiveInRow.grid_game_name(), Some("fiveInRow"));
        assert_eq!(GameKind::LanguageCards.grid_game_name(), None);
    }
}
