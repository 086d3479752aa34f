use crate::board::Cell;
use crate::player::Seat;
use ratatui::style::{Color, Modifier, Style};

pub fn get_cell_style(cell: Cell, is_cursor: bool) -> (&'static str, Style) {
    match cell {
        Some(Seat::First) => ("X", Style::default().fg(Color::Magenta)),
        Some(Seat::Second) => ("O", Style::default().fg(Color::Cyan)),
        None if is_cursor => (
            "▓",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => ("+", Style::default().fg(Color::DarkGray)),
    }
}
