//! # Terminal User Interface Module
//!
//! Terminal front end built on Ratatui and Crossterm: raw mode, alternate
//! screen, mouse capture and a fixed-rate redraw loop.
//!
//! ## Key Components
//! - **Event Loop**: polls input every 100 ms, ticks animations and redraws
//! - **Input Processing**: keyboard per screen, mouse clicks on cards and cells
//! - **Widget Rendering**: launcher, boards with status panels, flashcards

use crate::app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, time::Duration};

pub mod games;
pub mod input;
pub mod layout;
pub mod mouse;
pub mod widgets;

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the event loop until the app asks to quit,
/// and restores the terminal afterwards, also when drawing fails.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, app);
    restore_terminal(&mut terminal)?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        app.tick();

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        input::handle_key_press(app, key.code);
                    }
                }
                Event::Mouse(mouse) => {
                    let terminal_size = terminal.size()?;
                    let terminal_rect = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    input::handle_mouse_event(app, mouse.kind, mouse.column, mouse.row, terminal_rect);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Initializes the terminal for raw mode operation
///
/// Raw mode is switched off again if the rest of the setup fails.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let setup = (|| {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        execute!(
            handle,
            EnterAlternateScreen,
            EnableMouseCapture,
            crossterm::cursor::Hide
        )?;
        Terminal::new(CrosstermBackend::new(stdout))
    })();
    rollback_on_error(setup, disable_raw_mode)
}

fn rollback_on_error<T>(result: io::Result<T>, rollback: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        // the setup error is the one worth reporting
        let _ = rollback();
    }
    result
}

/// Restores the terminal to normal operation mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    disable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_rolls_back() {
        let rolled_back = Cell::new(false);
        let failed: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        let result = rollback_on_error(failed, || {
            rolled_back.set(true);
            Ok(())
        });
        assert!(result.is_err());
        assert!(rolled_back.get());
    }

    #[test]
    fn successful_setup_keeps_state() {
        let rolled_back = Cell::new(false);
        let result = rollback_on_error(Ok(7), || {
            rolled_back.set(true);
            Ok(())
        });
        assert_eq!(result.unwrap(), 7);
        assert!(!rolled_back.get());
    }
}
