use crate::board::Cell;
use crate::player::Seat;
use ratatui::style::{Color, Modifier, Style};

pub fn get_cell_style(cell: Cell, is_cursor: bool) -> (&'static str, Style) {
    match cell {
        Some(Seat::First) => ("🔴", Style::default().fg(Color::Red)),
        Some(Seat::Second) => ("🟡", Style::default().fg(Color::Yellow)),
        None if is_cursor => (
            "▽",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => ("·", Style::default().fg(Color::DarkGray)),
    }
}

/// Colour of the drop marker above the board for the seat to move.
pub fn seat_color(seat: Seat) -> Color {
    match seat {
        Seat::First => Color::Red,
        Seat::Second => Color::Yellow,
    }
}
