//! # Board Utilities
//!
//! Generic rectangular grids plus the win and draw checks shared by all grid
//! games. Cells are stored row-major in a flat vector so the line scans in
//! `line_scan` can run directly over the backing slice.

use crate::error::{ArcadeError, Result};
use crate::player::Seat;

/// A board cell: empty, or occupied by one of the seats.
pub type Cell = Option<Seat>;

/// A coordinate on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A `rows × cols` grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `initial`.
    pub fn new(rows: usize, cols: usize, initial: T) -> Self {
        Self {
            cells: vec![initial; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self {
            cells: rows.into_iter().flatten().collect(),
            rows: height,
            cols: width,
        })
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        if self.contains(pos) {
            self.cells.get(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Stores `value` at `pos`, returning the previous content.
    pub fn set(&mut self, pos: Position, value: T) -> Result<T> {
        if !self.contains(pos) {
            return Err(ArcadeError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = pos.row * self.cols + pos.col;
        Ok(std::mem::replace(&mut self.cells[idx], value))
    }

    /// The cells of row `r`, or an empty slice when out of range.
    pub fn row(&self, r: usize) -> &[T] {
        if r < self.rows {
            &self.cells[r * self.cols..(r + 1) * self.cols]
        } else {
            &[]
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// The flat row-major backing slice.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T: PartialEq> Grid<T> {
    /// True when no cell holds `empty`.
    pub fn is_full(&self, empty: &T) -> bool {
        self.cells.iter().all(|c| c != empty)
    }
}

/// Signed bounds check, for coordinates produced by stepping off a position.
pub fn is_valid_position(row: isize, col: isize, rows: usize, cols: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
}

/// The up to eight cells surrounding `pos`, clipped to the board.
pub fn neighbors(pos: Position, rows: usize, cols: usize) -> Vec<Position> {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
    OFFSETS
        .iter()
        .map(|&(dr, dc)| (pos.row as isize + dr, pos.col as isize + dc))
        .filter(|&(r, c)| is_valid_position(r, c, rows, cols))
        .map(|(r, c)| Position::new(r as usize, c as usize))
        .collect()
}

/// True if `target` fills `win_length` consecutive cells in any direction.
pub fn check_win_condition<T: PartialEq>(grid: &Grid<T>, target: &T, win_length: usize) -> bool {
    line_scan::has_line(grid.as_slice(), grid.cols(), grid.rows(), target, win_length)
}

/// The seat holding `win_length` in a row, checking `First` before `Second`.
pub fn winner(grid: &Grid<Cell>, win_length: usize) -> Option<Seat> {
    Seat::ALL
        .into_iter()
        .find(|&seat| check_win_condition(grid, &Some(seat), win_length))
}

/// True when the board is full and nobody has won.
pub fn is_draw(grid: &Grid<Cell>, win_length: usize) -> bool {
    grid.is_full(&None) && winner(grid, win_length).is_none()
}

/// The cells of the first winning line for `seat`, for highlighting.
pub fn winning_line(grid: &Grid<Cell>, seat: Seat, win_length: usize) -> Option<Vec<Position>> {
    line_scan::find_line(grid.as_slice(), grid.cols(), grid.rows(), &Some(seat), win_length)
        .map(|line| line.cells().map(Position::from).collect())
}

/// Formats elapsed seconds as `MM:SS`.
pub fn format_game_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Some(Seat::First);
    const O: Cell = Some(Seat::Second);
    const E: Cell = None;

    fn grid(rows: Vec<Vec<Cell>>) -> Grid<Cell> {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn create_board_fills_every_cell() {
        let g = Grid::new(6, 7, E);
        assert_eq!(g.dimensions(), (6, 7));
        assert!(g.iter_rows().all(|r| r.len() == 7 && r.iter().all(Option::is_none)));
        assert_eq!(g.iter_rows().count(), 6);
    }

    #[test]
    fn top_row_of_x_wins() {
        let g = grid(vec![vec![X, X, X], vec![O, O, E], vec![E, E, E]]);
        assert_eq!(winner(&g, 3), Some(Seat::First));
        assert!(!is_draw(&g, 3));
        assert_eq!(
            winning_line(&g, Seat::First, 3).unwrap(),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn anti_diagonal_wins() {
        let g = grid(vec![vec![X, X, O], vec![X, O, E], vec![O, E, E]]);
        assert_eq!(winner(&g, 3), Some(Seat::Second));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let g = grid(vec![vec![X, O, X], vec![X, O, O], vec![O, X, X]]);
        assert_eq!(winner(&g, 3), None);
        assert!(is_draw(&g, 3));
    }

    #[test]
    fn empty_board_is_not_draw() {
        let g = Grid::new(3, 3, E);
        assert!(!is_draw(&g, 3));
        assert_eq!(winner(&g, 3), None);
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut g = Grid::new(2, 2, E);
        assert!(matches!(
            g.set(Position::new(2, 0), X),
            Err(ArcadeError::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert_eq!(g.set(Position::new(1, 1), X).unwrap(), None);
        assert_eq!(g.get(Position::new(1, 1)), Some(&X));
        assert_eq!(g.row(1), &[E, X]);
        assert!(g.row(5).is_empty());
    }

    #[test]
    fn copies_are_independent() {
        let mut g = Grid::new(2, 2, E);
        let copy = g.clone();
        g.set(Position::new(0, 0), O).unwrap();
        assert_eq!(copy.get(Position::new(0, 0)), Some(&E));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Grid::from_rows(vec![vec![E, E], vec![E]]).is_none());
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(neighbors(Position::new(0, 0), 3, 3).len(), 3);
        assert_eq!(neighbors(Position::new(1, 1), 3, 3).len(), 8);
        assert_eq!(neighbors(Position::new(2, 1), 3, 3).len(), 5);
    }

    #[test]
    fn signed_bounds() {
        assert!(is_valid_position(0, 0, 1, 1));
        assert!(!is_valid_position(-1, 0, 3, 3));
        assert!(!is_valid_position(0, 3, 3, 3));
    }

    #[test]
    fn game_time_is_zero_padded() {
        assert_eq!(format_game_time(0), "00:00");
        assert_eq!(format_game_time(75), "01:15");
        assert_eq!(format_game_time(3600), "60:00");
    }
}
