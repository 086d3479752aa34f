//! # Mouse Module
//!
//! Maps clicks and wheel events to the same actions as the keyboard, using
//! the geometry from [`crate::tui::layout`].

use crate::app::{App, AppMode};
use crate::games::language_cards::Language;
use crate::tui::layout::{self, BoardGeometry};
use crate::GridGame;
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Handle mouse events for the application
pub fn handle_mouse_event(app: &mut App, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => handle_mouse_click(app, col, row, terminal_size),
        MouseEventKind::ScrollUp => handle_mouse_scroll(app, true),
        MouseEventKind::ScrollDown => handle_mouse_scroll(app, false),
        _ => {}
    }
}

fn handle_mouse_click(app: &mut App, col: u16, row: u16, terminal_size: Rect) {
    match app.mode {
        AppMode::Home => {
            let (_, list_area, _) = layout::home_layout(terminal_size);
            if let Some(index) = layout::launcher_item_at(list_area, row, app.launcher.cards().len()) {
                app.open_card(index);
            }
        }
        AppMode::InGame => {
            let Some(game) = &app.game else {
                return;
            };
            let (board_area, _) = layout::game_layout(terminal_size);
            let geo = BoardGeometry::for_game(game, board_area);
            let gravity = game.grid_match().rules().gravity;
            if let Some(pos) = geo.cell_at(col, row, gravity) {
                app.board_cursor = (pos.row, pos.col);
                app.play(pos);
            }
        }
        AppMode::Cards => {
            let (_, deck_areas, _) = layout::cards_layout(terminal_size);
            let card_width = if app.cards.show_phonetics {
                layout::CARD_WIDTH_WITH_PHONETICS
            } else {
                layout::CARD_WIDTH
            };
            for (language, area) in Language::ALL.into_iter().zip(deck_areas) {
                let count = app.cards.deck(language).len();
                if let Some(index) = layout::card_at(area, card_width, col, row, count) {
                    app.cards.select(language, index);
                    return;
                }
            }
        }
    }
}

fn handle_mouse_scroll(app: &mut App, scroll_up: bool) {
    if app.mode != AppMode::InGame {
        return;
    }
    if scroll_up {
        app.scroll_history_up();
    } else {
        app.scroll_history_down();
    }
}
