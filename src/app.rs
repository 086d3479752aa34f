//! # Application State
//!
//! The state shared by the terminal front end: which screen is shown, the open
//! game, the cursor, the score store and the transient UI bits (messages, the
//! connect four drop animation, the game clock).

use crate::board::{format_game_time, Position};
use crate::error::{ArcadeError, Result};
use crate::game_wrapper::{GameWrapper, MoveWrapper};
use crate::games::language_cards::LanguageCards;
use crate::grid_match::MoveResult;
use crate::launcher::{GameKind, Launcher};
use crate::player::Seat;
use crate::score::ScoreStore;
use crate::GridGame;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Which screen is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Home,
    InGame,
    Cards,
}

/// A connect four coin falling towards its resting row, one row per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropAnimation {
    pub col: usize,
    pub row: usize,
    pub target_row: usize,
    pub seat: Seat,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub launcher: Launcher,
    pub game: Option<GameWrapper>,
    pub cards: LanguageCards,
    pub scores: ScoreStore,
    pub board_cursor: (usize, usize),
    /// Last error or notice shown under the board.
    pub message: Option<String>,
    pub drop_animation: Option<DropAnimation>,
    pub history_scroll: u16,
    started_at: Instant,
    finished_after: Option<u64>,
}

impl App {
    /// Creates the app on the home screen. `seed` drives the flashcard shuffle.
    pub fn new(scores: ScoreStore, seed: u64) -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Home,
            launcher: Launcher::default(),
            game: None,
            cards: LanguageCards::new(seed),
            scores,
            board_cursor: (0, 0),
            message: None,
            drop_animation: None,
            history_scroll: 0,
            started_at: Instant::now(),
            finished_after: None,
        }
    }

    /// Opens a game by its command-line name, skipping the launcher.
    pub fn open_named(&mut self, name: &str) -> Result<()> {
        let key = name.to_lowercase().replace(['-', '_', ' '], "");
        if matches!(key.as_str(), "languagecards" | "cards" | "alphabet") {
            self.open(GameKind::LanguageCards)
        } else {
            let game = GameWrapper::from_name(name)?;
            self.enter_game(game);
            Ok(())
        }
    }

    /// Opens the game behind a launcher card.
    pub fn open(&mut self, kind: GameKind) -> Result<()> {
        match kind.grid_game_name() {
            Some(name) => {
                let game = GameWrapper::from_name(name)?;
                self.enter_game(game);
            }
            None => {
                self.cards.clear_feedback();
                self.mode = AppMode::Cards;
            }
        }
        Ok(())
    }

    /// Opens the focused launcher card.
    pub fn open_focused(&mut self) {
        self.open_card(self.launcher.focus());
    }

    /// Opens the launcher card at `index`; an index past the last card does
    /// nothing.
    pub fn open_card(&mut self, index: usize) {
        if let Some(kind) = self.launcher.select(index) {
            if let Err(e) = self.open(kind) {
                self.message = Some(e.to_string());
            }
        }
    }

    fn enter_game(&mut self, mut game: GameWrapper) {
        let score = self.scores.get(game.id());
        game.grid_match_mut().set_score(score);
        let (rows, cols) = game.board().dimensions();
        self.board_cursor = match game {
            GameWrapper::Connect4(_) => (0, cols / 2),
            _ => (rows / 2, cols / 2),
        };
        info!(game = game.id(), "game opened");
        self.game = Some(game);
        self.mode = AppMode::InGame;
        self.restart_clock();
    }

    pub fn go_home(&mut self) {
        self.mode = AppMode::Home;
        self.game = None;
        self.drop_animation = None;
        self.message = None;
    }

    /// Called once per frame.
    pub fn tick(&mut self) {
        if let Some(anim) = &mut self.drop_animation {
            if anim.row >= anim.target_row {
                self.drop_animation = None;
            } else {
                anim.row += 1;
            }
        }
    }

    /// Seconds since the game started, frozen once it finished.
    pub fn elapsed_secs(&self) -> u64 {
        self.finished_after
            .unwrap_or_else(|| self.started_at.elapsed().as_secs())
    }

    pub fn game_time(&self) -> String {
        format_game_time(self.elapsed_secs())
    }

    fn restart_clock(&mut self) {
        self.started_at = Instant::now();
        self.finished_after = None;
        self.drop_animation = None;
        self.message = None;
        self.history_scroll = 0;
    }

    /// Moves the board cursor, clamped to the board. Connect four only moves
    /// between columns.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let Some(game) = &self.game else {
            return;
        };
        let (rows, cols) = game.board().dimensions();
        let clamp = |v: usize, d: isize, n: usize| (v as isize + d).clamp(0, n as isize - 1) as usize;
        let d_row = if matches!(game, GameWrapper::Connect4(_)) { 0 } else { d_row };
        self.board_cursor = (
            clamp(self.board_cursor.0, d_row, rows),
            clamp(self.board_cursor.1, d_col, cols),
        );
    }

    pub fn play_at_cursor(&mut self) {
        let (row, col) = self.board_cursor;
        self.play(Position::new(row, col));
    }

    /// Plays the open game's move for `pos`. Rejected moves leave the game
    /// untouched and are reported in `message`.
    pub fn play(&mut self, pos: Position) {
        let Some(game) = &self.game else {
            return;
        };
        let mv = game.move_at(pos);
        if let Err(e) = self.apply_move(&mv) {
            debug!(error = %e, %mv, "move rejected");
            self.message = Some(e.to_string());
        }
    }

    /// Plays a move typed in the open game's notation (`"2,3"`, `"4"`,
    /// `"H8"`).
    pub fn play_notation(&mut self, text: &str) -> Result<MoveResult> {
        let game = self.game.as_ref().ok_or(ArcadeError::NotPlaying)?;
        let mv = game.parse_move(text).map_err(|reason| ArcadeError::InvalidMove {
            text: text.to_string(),
            reason,
        })?;
        self.apply_move(&mv)
    }

    fn apply_move(&mut self, mv: &MoveWrapper) -> Result<MoveResult> {
        let game = self.game.as_mut().ok_or(ArcadeError::NotPlaying)?;
        let seat = game.current_seat();
        let result = game.make_move(mv)?;
        self.message = None;
        if let Some(last) = game.grid_match().last_move().copied() {
            match &*game {
                GameWrapper::Connect4(c4) => {
                    self.board_cursor.1 = last.col;
                    self.drop_animation = c4.options.animate_drops.then_some(DropAnimation {
                        col: last.col,
                        row: 0,
                        target_row: last.row,
                        seat,
                    });
                }
                _ => self.board_cursor = (last.row, last.col),
            }
        }
        if let MoveResult::Finished(outcome) = result {
            self.finished_after = Some(self.started_at.elapsed().as_secs());
            debug!(?outcome, time = %self.game_time(), "recording result");
            self.save_score();
        }
        Ok(result)
    }

    /// Drops into a 0-based column of a connect four game.
    pub fn drop_in_column(&mut self, col: usize) {
        if matches!(self.game, Some(GameWrapper::Connect4(_))) {
            self.play(Position::new(0, col));
        }
    }

    pub fn undo(&mut self) {
        let Some(game) = &mut self.game else {
            return;
        };
        match game.undo() {
            Ok(record) => {
                self.board_cursor = match game {
                    GameWrapper::Connect4(_) => (0, record.col),
                    _ => (record.row, record.col),
                };
                self.drop_animation = None;
                self.message = Some(format!("Undid {}", game.describe_move(&record)));
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    pub fn reset_game(&mut self) {
        if let Some(game) = &mut self.game {
            game.reset();
            info!(game = game.id(), "game reset");
        }
        self.restart_clock();
    }

    fn save_score(&mut self) {
        let Some(game) = &self.game else {
            return;
        };
        if let Err(e) = self.scores.put(game.id(), game.grid_match().score()) {
            warn!(error = %e, "could not save scores");
            self.message = Some(e.to_string());
        }
    }

    pub fn toggle_column_numbers(&mut self) {
        if let Some(GameWrapper::Connect4(g)) = &mut self.game {
            g.toggle_column_numbers();
        }
    }

    pub fn toggle_animations(&mut self) {
        if let Some(GameWrapper::Connect4(g)) = &mut self.game {
            g.toggle_animations();
            if !g.options.animate_drops {
                self.drop_animation = None;
            }
        }
    }

    pub fn toggle_coordinates(&mut self) {
        if let Some(GameWrapper::FiveInRow(g)) = &mut self.game {
            g.toggle_coordinates();
        }
    }

    pub fn toggle_last_move_highlight(&mut self) {
        if let Some(GameWrapper::FiveInRow(g)) = &mut self.game {
            g.toggle_last_move_highlight();
        }
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    pub fn scroll_history_down(&mut self) {
        self.history_scroll = self.history_scroll.saturating_add(1);
    }
}
