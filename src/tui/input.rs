//! # Input Handling Module
//!
//! Translates key presses into actions on the [`App`], per screen.

use crate::app::{App, AppMode};
use crate::game_wrapper::GameWrapper;
use crate::tui::mouse;
use crossterm::event::{KeyCode, MouseEventKind};
use ratatui::layout::Rect;

/// Handles keyboard input based on the current application mode
pub fn handle_key_press(app: &mut App, key_code: KeyCode) {
    match app.mode {
        AppMode::Home => handle_home_input(key_code, app),
        AppMode::InGame => handle_ingame_input(key_code, app),
        AppMode::Cards => handle_cards_input(key_code, app),
    }
}

/// Handles mouse events by delegating to the mouse module
pub fn handle_mouse_event(app: &mut App, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    mouse::handle_mouse_event(app, kind, col, row, terminal_size);
}

fn handle_home_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Up => app.launcher.move_focus(-1),
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => app.launcher.move_focus(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_focused(),
        KeyCode::Char(c @ '1'..='9') => app.open_card((c as u8 - b'1') as usize),
        _ => {}
    }
}

fn handle_ingame_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => app.go_home(),
        KeyCode::Char('r') => app.reset_game(),
        KeyCode::Char('u') => app.undo(),
        KeyCode::Up => app.move_cursor(-1, 0),
        KeyCode::Down => app.move_cursor(1, 0),
        KeyCode::Left => app.move_cursor(0, -1),
        KeyCode::Right => app.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.play_at_cursor(),
        KeyCode::PageUp => app.scroll_history_up(),
        KeyCode::PageDown => app.scroll_history_down(),
        KeyCode::Char(c) => match app.game {
            Some(GameWrapper::Connect4(_)) => match c {
                '1'..='7' => app.drop_in_column((c as u8 - b'1') as usize),
                'n' => app.toggle_column_numbers(),
                'a' => app.toggle_animations(),
                _ => {}
            },
            Some(GameWrapper::FiveInRow(_)) => match c {
                'c' => app.toggle_coordinates(),
                'l' => app.toggle_last_move_highlight(),
                _ => {}
            },
            _ => {}
        },
        _ => {}
    }
}

fn handle_cards_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => app.go_home(),
        KeyCode::Char('s') => app.cards.shuffle(),
        KeyCode::Char('r') => app.cards.reset_order(),
        KeyCode::Char('p') => app.cards.toggle_phonetics(),
        KeyCode::Left => app.cards.move_focus(-1),
        KeyCode::Right => app.cards.move_focus(1),
        KeyCode::Down | KeyCode::Tab => app.cards.cycle_language(true),
        KeyCode::Up | KeyCode::BackTab => app.cards.cycle_language(false),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.cards.select_focused();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::language_cards::Language;
    use crate::score::ScoreStore;
    use crate::GridGame;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            handle_key_press(app, *key);
        }
    }

    #[test]
    fn home_navigation_opens_games() {
        let mut app = App::new(ScoreStore::in_memory(), 0);
        press(&mut app, &[KeyCode::Right, KeyCode::Enter]);
        assert_eq!(app.mode, AppMode::InGame);
        assert_eq!(app.game.as_ref().map(|g| g.id()), Some("connectFour"));

        press(&mut app, &[KeyCode::Esc, KeyCode::Char('4')]);
        assert_eq!(app.mode, AppMode::Cards);
        press(&mut app, &[KeyCode::Esc, KeyCode::Esc]);
        assert!(app.should_quit);
    }

    #[test]
    fn digit_without_card_stays_home() {
        let mut app = App::new(ScoreStore::in_memory(), 0);
        press(&mut app, &[KeyCode::Char('9'), KeyCode::Char('5')]);
        assert_eq!(app.mode, AppMode::Home);
        assert!(app.game.is_none());
        assert_eq!(app.launcher.selection_count("Tic Tac Toe"), 0);

        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.game.as_ref().map(|g| g.id()), Some("fiveInRow"));
    }

    #[test]
    fn connect_four_number_keys_drop() {
        let mut app = App::new(ScoreStore::in_memory(), 0);
        app.open_named("connect4").unwrap();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('1'), KeyCode::Char('u')]);
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.grid_match().history().len(), 1);
        press(&mut app, &[KeyCode::Char('n')]);
        match &app.game {
            Some(GameWrapper::Connect4(g)) => assert!(!g.options.show_column_numbers),
            _ => panic!("expected connect four"),
        }
    }

    #[test]
    fn five_in_row_keys_toggle_options() {
        let mut app = App::new(ScoreStore::in_memory(), 0);
        app.open_named("fiveInRow").unwrap();
        press(&mut app, &[KeyCode::Char('c'), KeyCode::Char('l'), KeyCode::Enter]);
        match &app.game {
            Some(GameWrapper::FiveInRow(g)) => {
                assert!(!g.options.show_coordinates);
                assert_eq!(g.highlighted_move(), None);
                assert_eq!(g.grid_match().history().len(), 1);
            }
            _ => panic!("expected five in row"),
        }
    }

    #[test]
    fn cards_keys() {
        let mut app = App::new(ScoreStore::in_memory(), 0);
        app.open_named("cards").unwrap();
        press(&mut app, &[KeyCode::Tab, KeyCode::Right, KeyCode::Enter, KeyCode::Char('p')]);
        assert_eq!(app.cards.focus(), (Language::Hebrew, 1));
        assert_eq!(app.cards.feedback(), Some("bet"));
        assert!(app.cards.show_phonetics);
    }
}
