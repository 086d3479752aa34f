//! # Layout Module
//!
//! Screen geometry shared by the renderer and the mouse handler. Both sides
//! call the same functions with the terminal size, so a click always maps to
//! the cell that was drawn under it.

use crate::board::Position;
use crate::game_wrapper::GameWrapper;
use crate::GridGame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of a flashcard without and with its pronunciation.
pub const CARD_WIDTH: u16 = 4;
pub const CARD_WIDTH_WITH_PHONETICS: u16 = 17;

/// Home screen: title, card list, footer.
pub fn home_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Index of the launcher card under screen row `y`. Each card takes two
/// lines inside a bordered list.
pub fn launcher_item_at(list_area: Rect, y: u16, count: usize) -> Option<usize> {
    let first = list_area.y + 1;
    if y < first || y >= list_area.y + list_area.height.saturating_sub(1) {
        return None;
    }
    let index = ((y - first) / 2) as usize;
    (index < count).then_some(index)
}

/// In-game screen: board on the left, info/history/help on the right.
pub fn game_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Right-hand panel: game info, move history, key help.
pub fn side_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),
            Constraint::Percentage(35),
            Constraint::Length(5),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Area inside a bordered block.
pub fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Where the cells of a board are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Top-left corner of cell (0, 0).
    pub x: u16,
    pub y: u16,
    pub rows: usize,
    pub cols: usize,
    pub cell_width: u16,
    /// Width of the row-label gutter, 0 when labels are hidden.
    pub label_width: u16,
    /// Lines above the first row used by column labels.
    pub header_height: u16,
}

impl BoardGeometry {
    pub fn for_game(game: &GameWrapper, board_area: Rect) -> Self {
        let area = inner(board_area);
        let (rows, cols) = game.board().dimensions();
        let (cell_width, label_width, header_height) = match game {
            GameWrapper::TicTacToe(_) => (4, 0, 0),
            GameWrapper::Connect4(g) => (3, 0, u16::from(g.options.show_column_numbers)),
            GameWrapper::FiveInRow(g) => {
                let shown = g.options.show_coordinates;
                (2, if shown { 3 } else { 0 }, u16::from(shown))
            }
        };
        Self {
            x: area.x + label_width,
            y: area.y + header_height,
            rows,
            cols,
            cell_width,
            label_width,
            header_height,
        }
    }

    /// Board cell under a screen position. Connect four accepts clicks on
    /// the column-number line as well.
    pub fn cell_at(&self, x: u16, y: u16, gravity: bool) -> Option<Position> {
        if x < self.x {
            return None;
        }
        let col = ((x - self.x) / self.cell_width) as usize;
        if col >= self.cols {
            return None;
        }
        if y < self.y {
            let on_header = self.header_height > 0 && y + self.header_height >= self.y;
            return (gravity && on_header).then_some(Position::new(0, col));
        }
        let row = (y - self.y) as usize;
        (row < self.rows).then_some(Position::new(row, col))
    }
}

/// Flashcard screen: stats header, one block per language, feedback footer.
pub fn cards_layout(area: Rect) -> (Rect, [Rect; 3], Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Length(4),
        ])
        .split(area);
    (chunks[0], [chunks[1], chunks[2], chunks[3]], chunks[4])
}

/// Number of cards per line in a language block.
pub fn cards_per_line(block: Rect, card_width: u16) -> usize {
    (inner(block).width / card_width).max(1) as usize
}

/// Card index under a screen position inside a language block.
pub fn card_at(block: Rect, card_width: u16, x: u16, y: u16, count: usize) -> Option<usize> {
    let area = inner(block);
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }
    let per_line = cards_per_line(block, card_width);
    let col = ((x - area.x) / card_width) as usize;
    if col >= per_line {
        return None;
    }
    let index = (y - area.y) as usize * per_line + col;
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_rows_map_to_cards() {
        let list = Rect::new(0, 3, 40, 12);
        assert_eq!(launcher_item_at(list, 3, 4), None);
        assert_eq!(launcher_item_at(list, 4, 4), Some(0));
        assert_eq!(launcher_item_at(list, 7, 4), Some(1));
        assert_eq!(launcher_item_at(list, 13, 4), None);
    }

    #[test]
    fn board_clicks_map_to_cells() {
        let game = GameWrapper::from_name("ticTacToe").unwrap();
        let geo = BoardGeometry::for_game(&game, Rect::new(0, 0, 30, 10));
        assert_eq!((geo.x, geo.y), (1, 1));
        assert_eq!(geo.cell_at(1, 1, false), Some(Position::new(0, 0)));
        assert_eq!(geo.cell_at(9, 3, false), Some(Position::new(2, 2)));
        assert_eq!(geo.cell_at(13, 3, false), None);
        assert_eq!(geo.cell_at(0, 1, false), None);
    }

    #[test]
    fn connect_four_header_selects_column() {
        let game = GameWrapper::from_name("connectFour").unwrap();
        let geo = BoardGeometry::for_game(&game, Rect::new(0, 0, 40, 12));
        assert_eq!(geo.header_height, 1);
        assert_eq!(geo.cell_at(7, 1, true), Some(Position::new(0, 2)));
        assert_eq!(geo.cell_at(7, 0, true), None);
    }

    #[test]
    fn five_in_row_gutter_offsets_cells() {
        let game = GameWrapper::from_name("fiveInRow").unwrap();
        let geo = BoardGeometry::for_game(&game, Rect::new(0, 0, 60, 20));
        assert_eq!((geo.x, geo.y), (4, 2));
        assert_eq!(geo.cell_at(2, 2, false), None);
        assert_eq!(geo.cell_at(18, 9, false), Some(Position::new(7, 7)));
    }

    #[test]
    fn cards_wrap_by_block_width() {
        let block = Rect::new(0, 0, 22, 6);
        assert_eq!(cards_per_line(block, CARD_WIDTH), 5);
        assert_eq!(card_at(block, CARD_WIDTH, 1, 1, 26), Some(0));
        assert_eq!(card_at(block, CARD_WIDTH, 5, 2, 26), Some(6));
        assert_eq!(card_at(block, CARD_WIDTH, 21, 1, 26), None);
        assert_eq!(card_at(block, CARD_WIDTH, 1, 4, 12), None);
    }
}
