#![no_std]

//! Line scanning for k-in-a-row grid games.
//!
//! Boards are flat row-major slices of `width * height` cells. Every function
//! treats coordinates outside the board as non-matching, so callers never need
//! to clip a scan themselves.

/// Scan directions as `(row step, column step)`: horizontal, vertical,
/// diagonal `\` and diagonal `/`.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A run of `length` cells starting at `(row, col)` and stepping by `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub row: usize,
    pub col: usize,
    pub direction: (i32, i32),
    pub length: usize,
}

impl Line {
    /// Coordinates covered by the line, in scan order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.direction;
        let (r, c) = (self.row as i32, self.col as i32);
        (0..self.length as i32).map(move |k| ((r + k * dr) as usize, (c + k * dc) as usize))
    }
}

fn cell_at<T>(cells: &[T], width: usize, height: usize, row: i32, col: i32) -> Option<&T> {
    if row < 0 || col < 0 || row >= height as i32 || col >= width as i32 {
        return None;
    }
    cells.get(row as usize * width + col as usize)
}

/// Returns true if `length` consecutive cells from `start` along `direction`
/// are all on the board and equal to `target`.
pub fn check_line<T: PartialEq>(
    cells: &[T],
    width: usize,
    height: usize,
    start: (i32, i32),
    direction: (i32, i32),
    length: usize,
    target: &T,
) -> bool {
    if length == 0 {
        return false;
    }
    (0..length as i32).all(|k| {
        cell_at(
            cells,
            width,
            height,
            start.0 + k * direction.0,
            start.1 + k * direction.1,
        ) == Some(target)
    })
}

/// Finds the first line of `length` cells equal to `target`.
///
/// Start cells are visited in row-major order and, for each start, the
/// directions in [`DIRECTIONS`] order.
pub fn find_line<T: PartialEq>(
    cells: &[T],
    width: usize,
    height: usize,
    target: &T,
    length: usize,
) -> Option<Line> {
    for row in 0..height {
        for col in 0..width {
            for &direction in DIRECTIONS.iter() {
                if check_line(
                    cells,
                    width,
                    height,
                    (row as i32, col as i32),
                    direction,
                    length,
                    target,
                ) {
                    return Some(Line {
                        row,
                        col,
                        direction,
                        length,
                    });
                }
            }
        }
    }
    None
}

/// Returns true if `target` occupies `length` consecutive cells anywhere.
pub fn has_line<T: PartialEq>(cells: &[T], width: usize, height: usize, target: &T, length: usize) -> bool {
    find_line(cells, width, height, target, length).is_some()
}

/// Counts the contiguous run of `target` through `(row, col)` along
/// `direction`, looking both forwards and backwards.
///
/// Returns 0 when the origin cell itself is not `target`.
pub fn run_length<T: PartialEq>(
    cells: &[T],
    width: usize,
    height: usize,
    row: usize,
    col: usize,
    direction: (i32, i32),
    target: &T,
) -> usize {
    let (r, c) = (row as i32, col as i32);
    if cell_at(cells, width, height, r, c) != Some(target) {
        return 0;
    }
    let mut count = 1;
    for sign in [1, -1] {
        let mut k = 1;
        while cell_at(
            cells,
            width,
            height,
            r + sign * k * direction.0,
            c + sign * k * direction.1,
        ) == Some(target)
        {
            count += 1;
            k += 1;
        }
    }
    count
}
