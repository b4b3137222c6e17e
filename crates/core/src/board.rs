//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell holds a tile value (`0` for empty).
//! Uses a flat row-major vector; the side length is fixed at construction.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left edge.
//!
//! Rows and columns are read out as copies ([`Line`]) and written back
//! explicitly, so a transform never holds a live view into the grid.

use crate::config::validate_size;
use crate::error::ConfigError;
use crate::line::{can_collapse, collapse_line, Line};
use crate::types::{can_merge, is_valid_tile, Direction, Tile};

/// Outcome of sliding the whole board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// True if any tile changed value or position
    pub changed: bool,
    /// Sum of the tiles created by merges during the move
    pub merged: u64,
}

/// The game board - N x N tiles using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of tiles, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Board {
    /// Create a new empty board with the given side length
    pub fn new(size: u8) -> Result<Self, ConfigError> {
        let size = size as usize;
        validate_size(size)?;
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a board from rows of tile values
    ///
    /// The grid must be square, within the supported size range, and hold
    /// only empty cells or powers of two up to `MAX_TILE`.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let size = rows.len();
        validate_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(ConfigError::RaggedGrid {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(ConfigError::InvalidTile { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Flat index of the `k`-th cell of line `i` as read for `dir`
    ///
    /// Left reads row `i` forwards, Right backwards; Up reads column `i`
    /// top-down, Down bottom-up.
    #[inline(always)]
    fn line_index(&self, dir: Direction, i: usize, k: usize) -> usize {
        let n = self.size;
        match dir {
            Direction::Left => i * n + k,
            Direction::Right => i * n + (n - 1 - k),
            Direction::Up => k * n + i,
            Direction::Down => (n - 1 - k) * n + i,
        }
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds or `tile` is not a valid tile value
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        if !is_valid_tile(tile) {
            return false;
        }
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Copy of line `i` oriented so that `dir` travels toward index 0
    pub fn line(&self, dir: Direction, i: usize) -> Line {
        (0..self.size)
            .map(|k| self.cells[self.line_index(dir, i, k)])
            .collect()
    }

    /// Write an oriented line back, undoing the orientation of [`Board::line`]
    pub(crate) fn set_line(&mut self, dir: Direction, i: usize, values: &[Tile]) {
        for (k, &value) in values.iter().take(self.size).enumerate() {
            let idx = self.line_index(dir, i, k);
            self.cells[idx] = value;
        }
    }

    /// Copy of a row, left to right
    pub fn row(&self, row: usize) -> Line {
        self.line(Direction::Left, row)
    }

    /// Copy of a column, top to bottom
    pub fn col(&self, col: usize) -> Line {
        self.line(Direction::Up, col)
    }

    pub(crate) fn set_row(&mut self, row: usize, values: &[Tile]) {
        self.set_line(Direction::Left, row, values);
    }

    pub(crate) fn set_col(&mut self, col: usize, values: &[Tile]) {
        self.set_line(Direction::Up, col, values);
    }

    /// Slide every row or column in `dir`, merging equal neighbours
    pub fn slide(&mut self, dir: Direction) -> MoveResult {
        let mut result = MoveResult::default();

        for i in 0..self.size {
            let line = self.line(dir, i);
            let collapse = collapse_line(&line);
            result.merged += collapse.merged;
            if collapse.line != line {
                result.changed = true;
                self.set_line(dir, i, &collapse.line);
            }
        }

        result
    }

    /// Pure variant of [`Board::slide`]: returns the moved board
    pub fn slid(&self, dir: Direction) -> (Board, MoveResult) {
        let mut next = self.clone();
        let result = next.slide(dir);
        (next, result)
    }

    /// Check whether sliding in `dir` would change anything, without mutating
    pub fn can_slide(&self, dir: Direction) -> bool {
        (0..self.size).any(|i| can_collapse(&self.line(dir, i)))
    }

    /// Iterate over (row, col) of every empty cell, row by row
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == 0)
            .map(move |(idx, _)| (idx / n, idx % n))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == 0).count()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&tile| tile != 0)
    }

    /// Check if two mergeable tiles touch horizontally or vertically
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let tile = self.cells[row * n + col];
                if col + 1 < n && can_merge(tile, self.cells[row * n + col + 1]) {
                    return true;
                }
                if row + 1 < n && can_merge(tile, self.cells[(row + 1) * n + col]) {
                    return true;
                }
            }
        }
        false
    }

    /// Check if any cell holds exactly `value`
    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&tile| tile as u64).sum()
    }

    /// Highest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Get a reference to the internal row-major cells
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Convert to a 2D vector (row-major)
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }
}
