//! Grid module - the 4x4 tile matrix and its row operations
//!
//! The grid stores tile values directly (`0` = empty, otherwise a power of two).
//! Every move is expressed as a "Left" pass over a normalized grid: vertical
//! moves transpose first, Right/Down moves reverse each row, and the same
//! transforms are undone afterwards.
//! Coordinates: (row, col) where both range 0..3, (0, 0) is top-left.

use arrayvec::ArrayVec;

use crate::types::{Direction, CELL_COUNT, GRID_SIZE};

/// Row-major tile matrix
pub type Rows = [[u32; GRID_SIZE]; GRID_SIZE];

/// Stack-only list of empty cell coordinates
pub type EmptyCells = ArrayVec<(usize, usize), CELL_COUNT>;

/// Whether `value` may sit in a cell: `0` (empty) or a power of two, minimum 2.
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

fn mergeable(a: u32, b: u32) -> bool {
    a == b && (a == 0 || a.checked_mul(2).is_some())
}

/// The game grid - 4 rows x 4 columns of tile values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: Rows,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a grid from explicit rows
    ///
    /// Returns None if any cell is not a valid tile (see [`is_valid_tile`]).
    pub fn from_rows(cells: Rows) -> Option<Self> {
        if cells.iter().flatten().all(|&v| is_valid_tile(v)) {
            Some(Self { cells })
        } else {
            None
        }
    }

    /// Borrow the rows (row-major)
    pub fn rows(&self) -> &Rows {
        &self.cells
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds or `value` is not a valid tile
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        if !is_valid_tile(value) {
            return false;
        }
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells = [[0; GRID_SIZE]; GRID_SIZE];
    }

    /// Collect the coordinates of all empty cells, row-major.
    ///
    /// Recomputed on every call; the result is never cached.
    pub fn empty_cells(&self) -> EmptyCells {
        let mut out = EmptyCells::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().flatten().any(|&v| v == 0)
    }

    /// Number of nonzero tiles
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Whether any cell holds exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&v| v == value)
    }

    /// Largest tile on the grid (0 when empty)
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Swap rows and columns
    pub fn transpose(&mut self) {
        for r in 0..GRID_SIZE {
            for c in (r + 1)..GRID_SIZE {
                let tmp = self.cells[r][c];
                self.cells[r][c] = self.cells[c][r];
                self.cells[c][r] = tmp;
            }
        }
    }

    /// Reverse every row in place
    pub fn reverse_rows(&mut self) {
        for row in &mut self.cells {
            row.reverse();
        }
    }

    /// Transform so that a move in `dir` becomes a Left move
    pub fn normalize(&mut self, dir: Direction) {
        if dir.is_vertical() {
            self.transpose();
        }
        if dir.is_reversed() {
            self.reverse_rows();
        }
    }

    /// Undo [`Grid::normalize`] for the same direction
    pub fn denormalize(&mut self, dir: Direction) {
        if dir.is_reversed() {
            self.reverse_rows();
        }
        if dir.is_vertical() {
            self.transpose();
        }
    }

    /// Slide nonzero tiles toward column 0, preserving order.
    /// Returns true if any tile changed position.
    pub fn compress(&mut self) -> bool {
        let mut changed = false;
        for row in &mut self.cells {
            let mut packed = [0u32; GRID_SIZE];
            let mut pos = 0;
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    packed[pos] = v;
                    if pos != c {
                        changed = true;
                    }
                    pos += 1;
                }
            }
            *row = packed;
        }
        changed
    }

    /// Merge equal neighbours left-to-right.
    ///
    /// The left tile of a pair doubles and the right one is zeroed, so a tile
    /// merges at most once per pass: `[2, 2, 2, 0]` becomes `[4, 0, 2, 0]`.
    /// Returns (any merge happened, sum of the merged tile values).
    ///
    /// A pair whose doubled value would not fit in a `u32` stays put.
    pub fn merge(&mut self) -> (bool, u32) {
        let mut merged = false;
        let mut gained = 0u32;
        for row in &mut self.cells {
            let mut c = 0;
            while c + 1 < GRID_SIZE {
                let doubled = match row[c] {
                    0 => None,
                    v if v == row[c + 1] => v.checked_mul(2),
                    _ => None,
                };
                if let Some(v) = doubled {
                    row[c] = v;
                    row[c + 1] = 0;
                    gained = gained.saturating_add(v);
                    merged = true;
                    c += 2;
                } else {
                    c += 1;
                }
            }
        }
        (merged, gained)
    }

    /// Whether any horizontally or vertically adjacent pair is equal.
    ///
    /// Empty pairs count as equal; callers only rely on this once the grid
    /// has no empty cells.
    pub fn can_merge(&self) -> bool {
        for row in &self.cells {
            for c in 0..GRID_SIZE - 1 {
                if mergeable(row[c], row[c + 1]) {
                    return true;
                }
            }
        }
        for r in 0..GRID_SIZE - 1 {
            for c in 0..GRID_SIZE {
                if mergeable(self.cells[r][c], self.cells[r + 1][c]) {
                    return true;
                }
            }
        }
        false
    }

    /// Full / no-merge check used for the Lost status
    pub fn is_stuck(&self) -> bool {
        !self.has_empty() && !self.can_merge()
    }
}
